//! 工具模块

pub mod scan;
pub mod user_buffer;

pub use scan::scan_two_counts;
pub use user_buffer::{UserBuffer, UserSlice};

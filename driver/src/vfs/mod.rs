//! 虚拟文件系统的会话层
//!
//! 只保留驱动需要的部分：错误码、[`File`] 会话接口、权限位与打开标志。
//! 具体文件由 [`fs::proc`](crate::fs::proc) 提供。

pub mod error;
pub mod file;
pub mod inode;

pub use error::FsError;
pub use file::{File, OpenFlags, SeekWhence};
pub use inode::{FileMode, InodeMetadata};

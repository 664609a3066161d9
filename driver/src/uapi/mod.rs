//! 与用户空间共用定义和声明
//!
//! 包含 errno 与 ioctl 请求码，确保驱动和用户程序的一致性

pub mod errno;
pub mod ioctl;

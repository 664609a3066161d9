//! procfs
//!
//! 驱动用 [`ProcFS::proc_create`] 注册带 [`ProcOps`] 回调的条目，
//! 用户态经 [`ProcFS::open`] 得到 [`ProcFile`] 会话。

pub mod file;
pub mod inode;
pub mod proc;

pub use file::ProcFile;
pub use inode::{ProcEntry, ProcOps, generic_file_llseek};
pub use proc::ProcFS;

//! 文件系统
//!
//! 目前只有 procfs：驱动在其中注册状态文件。

pub mod proc;

#[cfg(test)]
mod tests;

//! 内核风格日志
//!
//! 驱动通过 `pr_*` 宏输出日志。消息先经过缓冲级别过滤，进入有界环形缓冲区
//! （相当于 dmesg）；足够严重的消息同时打印到控制台。每条记录带有发出它的
//! 模块路径，显示时取最后一段作为前缀。

pub mod buffer;
pub mod config;
pub mod entry;
pub mod level;
mod log_core;
pub mod macros;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::fmt;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::LogCore;

use lazy_static::lazy_static;

lazy_static! {
    static ref KERNEL_LOG: LogCore = LogCore::default();
}

#[doc(hidden)]
pub fn printk(level: LogLevel, target: &'static str, args: fmt::Arguments) {
    KERNEL_LOG.record(level, target, args);
}

#[doc(hidden)]
#[inline]
pub fn enabled(level: LogLevel) -> bool {
    KERNEL_LOG.enabled(level)
}

/// 设置写入缓冲区的日志级别
pub fn set_log_level(level: LogLevel) {
    KERNEL_LOG.set_buffer_level(level);
}

/// 当前缓冲区日志级别
pub fn log_level() -> LogLevel {
    KERNEL_LOG.buffer_level()
}

/// 设置打印到控制台的日志级别
pub fn set_console_level(level: LogLevel) {
    KERNEL_LOG.set_console_level(level);
}

/// 当前控制台日志级别
pub fn console_level() -> LogLevel {
    KERNEL_LOG.console_level()
}

/// 取出并清空全部未读日志
pub fn drain() -> Vec<LogEntry> {
    core::iter::from_fn(|| KERNEL_LOG.pop()).collect()
}

/// 因缓冲区已满而丢弃的日志条数
pub fn dropped() -> usize {
    KERNEL_LOG.dropped()
}

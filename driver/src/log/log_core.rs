//! 日志核心
//!
//! `LogCore` 持有缓冲区与两道级别阈值，可以独立实例化，测试不会干扰全局日志。

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use super::buffer::LogBuffer;
use super::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL, LOG_BUFFER_ENTRIES};
use super::entry::LogEntry;
use super::level::{ANSI_RESET, LogLevel};
use crate::arch::timer;
use crate::console::Stdout;

/// 日志缓冲区加两道级别阈值
pub struct LogCore {
    ring: LogBuffer,
    /// 低于此严重程度的消息直接丢弃
    buffer_level: AtomicU8,
    /// 达到此严重程度的消息同时写到控制台
    console_level: AtomicU8,
}

impl Default for LogCore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL)
    }
}

impl LogCore {
    /// ```rust
    /// use sink_net::log::{LogCore, LogLevel};
    ///
    /// let log = LogCore::new(LogLevel::Debug, LogLevel::Emergency);
    /// log.record(LogLevel::Info, "sink_net", format_args!("hello"));
    /// assert_eq!(log.pending(), 1);
    /// ```
    pub fn new(buffer_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            ring: LogBuffer::new(LOG_BUFFER_ENTRIES),
            buffer_level: AtomicU8::new(buffer_level as u8),
            console_level: AtomicU8::new(console_level as u8),
        }
    }

    /// 过滤、格式化并写入缓冲区，足够严重时同时打印
    pub fn record(&self, level: LogLevel, target: &'static str, args: fmt::Arguments) {
        if !self.enabled(level) {
            return;
        }
        // 驱动不区分 CPU，固定记为 0
        let entry = LogEntry::new(level, target, timer::get_time_us(), 0, args);
        if level.passes(self.console_level()) {
            let _ = writeln!(Stdout, "{}{}{}", level.ansi(), entry, ANSI_RESET);
        }
        self.ring.push(entry);
    }

    /// 取出最早的一条
    pub fn pop(&self) -> Option<LogEntry> {
        self.ring.pop()
    }

    /// 未读条数
    pub fn pending(&self) -> usize {
        self.ring.len()
    }

    /// 因缓冲区写满而被覆盖的条数
    pub fn dropped(&self) -> usize {
        self.ring.dropped()
    }

    /// `level` 是否会被记录
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.buffer_level())
    }

    /// 缓冲级别：更不严重的消息被丢弃
    pub fn buffer_level(&self) -> LogLevel {
        LogLevel::from_u8(self.buffer_level.load(Ordering::Relaxed))
    }

    /// 修改缓冲级别
    pub fn set_buffer_level(&self, level: LogLevel) {
        self.buffer_level.store(level as u8, Ordering::Relaxed);
    }

    /// 控制台级别
    pub fn console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Relaxed))
    }

    /// 修改控制台级别
    pub fn set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Relaxed);
    }
}

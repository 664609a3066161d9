//! 日志记录
//!
//! 消息以定长数组内联存放，格式化时不需要堆分配；超长消息在字符边界处截断。

use core::fmt;

use super::config::MAX_LOG_MESSAGE_LENGTH;
use super::level::LogLevel;

/// 一条日志
#[derive(Debug, Clone)]
pub struct LogEntry {
    level: LogLevel,
    /// 发出日志的模块，相当于内核的 `pr_fmt` 前缀
    target: &'static str,
    timestamp_us: usize,
    cpu: usize,
    len: usize,
    text: [u8; MAX_LOG_MESSAGE_LENGTH],
}

impl LogEntry {
    /// 格式化 `args` 生成一条记录
    pub fn new(
        level: LogLevel,
        target: &'static str,
        timestamp_us: usize,
        cpu: usize,
        args: fmt::Arguments,
    ) -> Self {
        let mut entry = Self {
            level,
            target,
            timestamp_us,
            cpu,
            len: 0,
            text: [0; MAX_LOG_MESSAGE_LENGTH],
        };
        let mut sink = Truncating {
            dst: &mut entry.text,
            filled: 0,
        };
        // Truncating 从不返回错误
        let _ = fmt::write(&mut sink, args);
        entry.len = sink.filled;
        entry
    }

    /// 日志级别
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 完整模块路径
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// `target` 的最后一段，例如 `sink_net`
    pub fn short_target(&self) -> &'static str {
        self.target.rsplit("::").next().unwrap_or(self.target)
    }

    /// 启动以来的微秒数
    pub fn timestamp_us(&self) -> usize {
        self.timestamp_us
    }

    /// 发出日志的 CPU
    pub fn cpu(&self) -> usize {
        self.cpu
    }

    /// 消息正文（可能已截断）
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.text[..self.len]).unwrap_or("")
    }
}

impl fmt::Display for LogEntry {
    /// `[    12.000345] <info> sink_net: Mode updated to RX`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.timestamp_us / 1_000_000;
        let micros = self.timestamp_us % 1_000_000;
        write!(
            f,
            "[{:5}.{:06}] <{}> {}: {}",
            secs,
            micros,
            self.level,
            self.short_target(),
            self.message()
        )
    }
}

/// 写满即停的 `fmt::Write`
struct Truncating<'a> {
    dst: &'a mut [u8],
    filled: usize,
}

impl fmt::Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.dst.len() - self.filled;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.dst[self.filled..self.filled + take].copy_from_slice(&s.as_bytes()[..take]);
        self.filled += take;
        Ok(())
    }
}

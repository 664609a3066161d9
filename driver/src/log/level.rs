//! 日志级别
//!
//! 数值与内核 `KERN_*` 相同，越小越严重。

use core::fmt;

/// 日志严重程度
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// 系统不可用
    Emergency = 0,
    /// 必须立即处理
    Alert = 1,
    /// 严重错误
    Critical = 2,
    /// 错误
    Error = 3,
    /// 警告
    Warning = 4,
    /// 正常但值得注意
    Notice = 5,
    /// 一般信息
    Info = 6,
    /// 调试信息
    Debug = 7,
}

impl LogLevel {
    const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// 超出范围的值按 `Debug` 处理
    pub const fn from_u8(value: u8) -> Self {
        if (value as usize) < Self::ALL.len() {
            Self::ALL[value as usize]
        } else {
            LogLevel::Debug
        }
    }

    /// dmesg 风格的短标签
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Emergency => "emerg",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "crit",
            LogLevel::Error => "err",
            LogLevel::Warning => "warn",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// 控制台着色（ANSI）
    pub const fn ansi(self) -> &'static str {
        match self {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical => "\x1b[1;31m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Notice => "\x1b[1;37m",
            LogLevel::Info => "\x1b[37m",
            LogLevel::Debug => "\x1b[90m",
        }
    }

    /// 比 `threshold` 同样严重或更严重
    pub const fn passes(self, threshold: LogLevel) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 控制台着色结束
pub const ANSI_RESET: &str = "\x1b[0m";

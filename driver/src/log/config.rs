//! 日志参数

use super::level::LogLevel;

/// 环形缓冲区容量（条）
pub const LOG_BUFFER_ENTRIES: usize = 64;

/// 单条消息的最大字节数，超出部分截断
pub const MAX_LOG_MESSAGE_LENGTH: usize = 256;

/// 进入缓冲区的最低严重程度
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// 同时打印到控制台的最低严重程度
pub const DEFAULT_CONSOLE_LEVEL: LogLevel = LogLevel::Warning;

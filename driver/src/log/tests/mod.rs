// driver/src/log/tests/mod.rs

use super::level::LogLevel;
use super::log_core::LogCore;
use crate::{kassert, test_case};

/// 与 `printk!` 相同的调用方式，但写入独立的 LogCore
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.record($level, module_path!(), format_args!($($arg)*))
    };
}

mod overflow;

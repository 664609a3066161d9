//! `pr_*` 日志宏
//!
//! ```rust
//! use sink_net::{pr_err, pr_info};
//!
//! pr_info!("SinkNet device initialized");
//! pr_err!("Invalid IOCTL cmd: {}", 0x89f2);
//! ```
//!
//! 级别未开启时不会对格式参数求值。

/// 以指定级别记录一条日志，目标为调用处的模块路径
#[macro_export]
macro_rules! printk {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if $crate::log::enabled(level) {
            $crate::log::printk(level, module_path!(), format_args!($($arg)+));
        }
    }};
}

/// `KERN_EMERG`：系统不可用
#[macro_export]
macro_rules! pr_emerg {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Emergency, $($arg)+) };
}

/// `KERN_ALERT`
#[macro_export]
macro_rules! pr_alert {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Alert, $($arg)+) };
}

/// `KERN_CRIT`
#[macro_export]
macro_rules! pr_crit {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Critical, $($arg)+) };
}

/// ```rust
/// # use sink_net::pr_err;
/// pr_err!("Failed to register sink net device. return code: {}", -17);
/// ```
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Error, $($arg)+) };
}

/// `KERN_WARNING`
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Warning, $($arg)+) };
}

/// `KERN_NOTICE`
#[macro_export]
macro_rules! pr_notice {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Notice, $($arg)+) };
}

/// `KERN_INFO`
#[macro_export]
macro_rules! pr_info {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Info, $($arg)+) };
}

/// `KERN_DEBUG`
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)+) => { $crate::printk!($crate::log::LogLevel::Debug, $($arg)+) };
}

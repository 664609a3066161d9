//! 单调时钟

/// 自启动以来经过的微秒数
#[cfg(any(test, feature = "std"))]
pub fn get_time_us() -> usize {
    use std::sync::OnceLock;
    use std::time::Instant;

    static BOOT: OnceLock<Instant> = OnceLock::new();
    BOOT.get_or_init(Instant::now).elapsed().as_micros() as usize
}

/// 自启动以来经过的微秒数（无时钟源时恒为 0）
#[cfg(not(any(test, feature = "std")))]
pub fn get_time_us() -> usize {
    0
}

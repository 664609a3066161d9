//! 控制台输出
//!
//! 启用 `std` 特性时写到 stderr，否则丢弃。

use core::fmt;

/// 控制台写入器
pub struct Stdout;

impl fmt::Write for Stdout {
    #[cfg(any(test, feature = "std"))]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        std::eprint!("{}", s);
        Ok(())
    }

    #[cfg(not(any(test, feature = "std")))]
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

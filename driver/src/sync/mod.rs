//! 同步原语
//!
//! 向驱动提供中断安全的自旋锁：加锁时关闭本地中断，解锁时恢复，
//! 对应 Linux 的 `spin_lock_irqsave` / `spin_unlock_irqrestore`。
mod intr_guard;
mod raw_spin_lock;

pub use intr_guard::*;
pub use raw_spin_lock::*;

/// 关中断自旋锁保护的数据
pub type SpinLock<T> = lock_api::Mutex<RawSpinLockIrq, T>;

/// [`SpinLock`] 的 RAII 保护器
pub type SpinLockGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinLockIrq, T>;

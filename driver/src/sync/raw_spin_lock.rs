//! `spin_lock_irqsave` 风格的原始锁
//!
//! 实现 `lock_api::RawMutex`，由 `lock_api::Mutex` 提供带数据的 RAII 接口。
//! 加锁前关闭本地中断，解锁后恢复加锁前的状态。进程上下文（procfs 写）
//! 持锁时，同一 CPU 上的发送路径不会再来抢同一把锁。

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::arch::intr::{local_irq_restore, local_irq_save};

/// 关中断自旋锁的原始部分
pub struct RawSpinLockIrq {
    held: AtomicBool,
    /// 只在持锁期间读写
    irq_flags: UnsafeCell<usize>,
}

// SAFETY: irq_flags 只由当前持锁者访问
unsafe impl Sync for RawSpinLockIrq {}
unsafe impl Send for RawSpinLockIrq {}

impl RawSpinLockIrq {
    /// 未加锁的初始状态
    pub const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
            irq_flags: UnsafeCell::new(0),
        }
    }

    fn acquire(&self) -> bool {
        !self.held.swap(true, Ordering::Acquire)
    }
}

impl Default for RawSpinLockIrq {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl lock_api::RawMutex for RawSpinLockIrq {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self::new();

    type GuardMarker = lock_api::GuardNoSend;

    fn lock(&self) {
        let flags = local_irq_save();
        while !self.acquire() {
            // 只读等待，避免争用时反复写缓存行
            while self.held.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }
        // SAFETY: 已持锁
        unsafe { *self.irq_flags.get() = flags };
    }

    fn try_lock(&self) -> bool {
        let flags = local_irq_save();
        if !self.acquire() {
            local_irq_restore(flags);
            return false;
        }
        // SAFETY: 已持锁
        unsafe { *self.irq_flags.get() = flags };
        true
    }

    unsafe fn unlock(&self) {
        // SAFETY: 调用者持锁
        let flags = unsafe { *self.irq_flags.get() };
        self.held.store(false, Ordering::Release);
        local_irq_restore(flags);
    }

    fn is_locked(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
}

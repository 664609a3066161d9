//! 不带锁的关中断区间

use crate::arch::constant::SSTATUS_SIE;
use crate::arch::intr::{local_irq_restore, local_irq_save};

/// `local_irq_save` / `local_irq_restore` 的 RAII 形式
///
/// 注册表在调用驱动的 `start_xmit` 时持有它，模拟发送路径运行在软中断上下文。
#[must_use]
pub struct IntrGuard {
    saved: usize,
}

impl IntrGuard {
    /// 关闭本地中断，离开作用域时恢复
    pub fn new() -> Self {
        Self {
            saved: local_irq_save(),
        }
    }

    /// 进入前本地中断是否开启
    pub fn was_enabled(&self) -> bool {
        self.saved & SSTATUS_SIE != 0
    }
}

impl Default for IntrGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IntrGuard {
    fn drop(&mut self) {
        local_irq_restore(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::intr::{irqs_enabled, local_irq_enable};
    use crate::{kassert, test_case};

    test_case!(test_guard_masks_then_restores, {
        local_irq_enable();

        let guard = IntrGuard::new();
        kassert!(guard.was_enabled());
        kassert!(!irqs_enabled());

        drop(guard);
        kassert!(irqs_enabled());
    });

    test_case!(test_nested_guards_unwind_in_order, {
        local_irq_enable();
        {
            let outer = IntrGuard::new();
            {
                let inner = IntrGuard::new();
                kassert!(!inner.was_enabled());
            }
            kassert!(!irqs_enabled());
            kassert!(outer.was_enabled());
        }
        kassert!(irqs_enabled());
    });
}

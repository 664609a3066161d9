//! 本地中断状态
//!
//! 每个 CPU 维护一个状态字，其中 [`SSTATUS_SIE`] 位表示本地中断是否开启。
//! 启用 `std` 特性时每个线程视为一个 CPU；否则整个系统只有一个 CPU。

use super::constant::SSTATUS_SIE;

#[cfg(any(test, feature = "std"))]
mod cpu_state {
    use core::cell::Cell;

    use super::SSTATUS_SIE;

    std::thread_local! {
        static SSTATUS: Cell<usize> = const { Cell::new(SSTATUS_SIE) };
    }

    pub(super) fn load() -> usize {
        SSTATUS.with(|s| s.get())
    }

    pub(super) fn store(value: usize) {
        SSTATUS.with(|s| s.set(value));
    }
}

#[cfg(not(any(test, feature = "std")))]
mod cpu_state {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::SSTATUS_SIE;

    static SSTATUS: AtomicUsize = AtomicUsize::new(SSTATUS_SIE);

    pub(super) fn load() -> usize {
        SSTATUS.load(Ordering::Relaxed)
    }

    pub(super) fn store(value: usize) {
        SSTATUS.store(value, Ordering::Relaxed);
    }
}

/// 开启本地中断
pub fn local_irq_enable() {
    cpu_state::store(cpu_state::load() | SSTATUS_SIE);
}

/// 关闭本地中断
pub fn local_irq_disable() {
    cpu_state::store(cpu_state::load() & !SSTATUS_SIE);
}

/// 本地中断是否开启
pub fn irqs_enabled() -> bool {
    cpu_state::load() & SSTATUS_SIE != 0
}

/// 读取当前状态字并关闭本地中断，返回值用于 [`local_irq_restore`]
pub fn local_irq_save() -> usize {
    let flags = cpu_state::load();
    cpu_state::store(flags & !SSTATUS_SIE);
    flags
}

/// 读取当前状态字并开启本地中断
pub fn local_irq_save_enable() -> usize {
    let flags = cpu_state::load();
    cpu_state::store(flags | SSTATUS_SIE);
    flags
}

/// 恢复之前保存的中断使能位
pub fn local_irq_restore(flags: usize) {
    let current = cpu_state::load();
    cpu_state::store((current & !SSTATUS_SIE) | (flags & SSTATUS_SIE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kassert, test_case};

    test_case!(test_read_and_disable_restores, {
        local_irq_enable();
        let flags = local_irq_save();
        kassert!(flags & SSTATUS_SIE != 0);
        kassert!(!irqs_enabled());

        local_irq_restore(flags);
        kassert!(irqs_enabled());
    });

    test_case!(test_restore_keeps_disabled_state, {
        local_irq_disable();
        let flags = local_irq_save_enable();
        kassert!(irqs_enabled());

        local_irq_restore(flags);
        kassert!(!irqs_enabled());
        local_irq_enable();
    });

    test_case!(test_cpus_are_independent, {
        local_irq_enable();
        let _flags = local_irq_save();

        let other = std::thread::spawn(irqs_enabled).join().unwrap();
        kassert!(other);

        local_irq_enable();
    });
}

//! sink 设备的计数存储
//!
//! 四个计数器由同一把关中断自旋锁保护：发送路径的递增与状态文件的覆盖写
//! 都在锁内完成。读取默认**不**持锁，因此并发读者可能看到只更新了一半的
//! 计数对（packets 已更新而 bytes 尚未更新）。需要一致快照时使用
//! [`StatusStore::snapshot_locked`]。

use core::sync::atomic::{AtomicU64, Ordering};

use super::net_device::NetDeviceStats;
use crate::sync::SpinLock;

/// 被操作的计数对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPair {
    /// 发送计数
    Tx,
    /// 接收计数
    Rx,
}

/// 四个计数器加一把锁
///
/// 计数器用原子类型存放只是为了让无锁读取合法；所有修改仍然在锁内进行。
pub struct StatusStore {
    lock: SpinLock<()>,
    tx_packets: AtomicU64,
    tx_bytes: AtomicU64,
    rx_packets: AtomicU64,
    rx_bytes: AtomicU64,
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusStore {
    /// 全部计数为 0
    pub const fn new() -> Self {
        Self {
            lock: SpinLock::new(()),
            tx_packets: AtomicU64::new(0),
            tx_bytes: AtomicU64::new(0),
            rx_packets: AtomicU64::new(0),
            rx_bytes: AtomicU64::new(0),
        }
    }

    fn pair(&self, pair: CounterPair) -> (&AtomicU64, &AtomicU64) {
        match pair {
            CounterPair::Tx => (&self.tx_packets, &self.tx_bytes),
            CounterPair::Rx => (&self.rx_packets, &self.rx_bytes),
        }
    }

    /// 记录一个长度为 `len` 的数据包，计数按 64 位回绕
    pub fn record(&self, pair: CounterPair, len: u64) {
        let (packets, bytes) = self.pair(pair);
        let _guard = self.lock.lock();
        packets.store(packets.load(Ordering::Relaxed).wrapping_add(1), Ordering::Relaxed);
        bytes.store(bytes.load(Ordering::Relaxed).wrapping_add(len), Ordering::Relaxed);
    }

    /// 以绝对值覆盖一个计数对
    pub fn overwrite(&self, pair: CounterPair, new_packets: u64, new_bytes: u64) {
        let (packets, bytes) = self.pair(pair);
        let _guard = self.lock.lock();
        packets.store(new_packets, Ordering::Relaxed);
        bytes.store(new_bytes, Ordering::Relaxed);
    }

    /// 不持锁读取四个计数
    pub fn snapshot(&self) -> NetDeviceStats {
        NetDeviceStats {
            tx_packets: self.tx_packets.load(Ordering::Relaxed),
            tx_bytes: self.tx_bytes.load(Ordering::Relaxed),
            rx_packets: self.rx_packets.load(Ordering::Relaxed),
            rx_bytes: self.rx_bytes.load(Ordering::Relaxed),
        }
    }

    /// 持锁读取，结果与所有已完成的修改一致
    pub fn snapshot_locked(&self) -> NetDeviceStats {
        let _guard = self.lock.lock();
        self.snapshot()
    }
}

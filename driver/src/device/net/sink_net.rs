//! sink 网络设备
//!
//! 交给 `sink%d` 的每个数据包都被立即丢弃，只留下计数。变体 A 可以通过私有
//! ioctl 在 TX/RX 之间切换计数目标，变体 B 只统计 TX。

use core::sync::atomic::{AtomicU8, Ordering};

use super::net_device::{NetDevice, NetDeviceCore, NetDeviceError, NetDeviceStats, NetdevTx};
use super::skb::{SkBuff, dev_kfree_skb, skb_tx_timestamp};
use super::status_store::{CounterPair, StatusStore};
use crate::config::SinkVariant;
use crate::uapi::ioctl::{SIOC_MODE_RX, SIOC_MODE_TX};
use crate::{pr_err, pr_info};

/// 计数模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SinkMode {
    /// 数据包计入 TX
    #[default]
    Tx = 0,
    /// 数据包计入 RX
    Rx = 1,
}

impl SinkMode {
    /// 状态报告里的写法：`TX` 或 `RX`
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkMode::Tx => "TX",
            SinkMode::Rx => "RX",
        }
    }

    /// 状态文件写入与发送路径操作的计数对
    pub fn counter_pair(&self) -> CounterPair {
        match self {
            SinkMode::Tx => CounterPair::Tx,
            SinkMode::Rx => CounterPair::Rx,
        }
    }

    fn from_u8(value: u8) -> Self {
        if value == SinkMode::Rx as u8 {
            SinkMode::Rx
        } else {
            SinkMode::Tx
        }
    }
}

/// sink 设备的句柄
///
/// 模块加载时创建，卸载时销毁；同一进程内可以同时存在多个互不影响的实例。
pub struct SinkNet {
    core: NetDeviceCore,
    variant: SinkVariant,
    status: StatusStore,
    /// 只由控制通道写入，读取不持锁
    mode: AtomicU8,
}

impl SinkNet {
    /// 用 `alloc_netdev` 给出的公共状态构造设备
    pub fn new(core: NetDeviceCore, variant: SinkVariant) -> Self {
        Self {
            core,
            variant,
            status: StatusStore::new(),
            mode: AtomicU8::new(SinkMode::Tx as u8),
        }
    }

    /// 驱动变体
    pub fn variant(&self) -> SinkVariant {
        self.variant
    }

    /// 当前模式；变体 B 恒为 TX
    pub fn mode(&self) -> SinkMode {
        match self.variant {
            SinkVariant::ModeSwitch => SinkMode::from_u8(self.mode.load(Ordering::Relaxed)),
            SinkVariant::TxOnly => SinkMode::Tx,
        }
    }

    fn set_mode(&self, mode: SinkMode) {
        self.mode.store(mode as u8, Ordering::Relaxed);
    }

    /// 计数存储
    pub fn status(&self) -> &StatusStore {
        &self.status
    }
}

impl NetDevice for SinkNet {
    fn core(&self) -> &NetDeviceCore {
        &self.core
    }

    fn init(&self) -> Result<(), NetDeviceError> {
        pr_info!("SinkNet device initialized");
        Ok(())
    }

    fn open(&self) -> Result<(), NetDeviceError> {
        pr_info!("sink_net_open called");
        self.core.netif_start_queue();
        Ok(())
    }

    fn stop(&self) -> Result<(), NetDeviceError> {
        pr_info!("sink_net_release called");
        self.core.netif_stop_queue();
        Ok(())
    }

    /// 计数后丢弃数据包，没有失败路径
    fn start_xmit(&self, mut skb: SkBuff) -> NetdevTx {
        let mode = self.mode();
        pr_info!("sink_net_xmit called, mode: {}", mode as u8);

        self.status.record(mode.counter_pair(), skb.len() as u64);

        skb_tx_timestamp(&mut skb);
        dev_kfree_skb(skb);

        NetdevTx::Ok
    }

    fn siocdevprivate(&self, cmd: u32) -> Result<(), NetDeviceError> {
        if self.variant == SinkVariant::TxOnly {
            return Err(NetDeviceError::NotSupported);
        }

        pr_info!("ioctl: command: {:x}", cmd);
        match cmd {
            SIOC_MODE_TX => {
                self.set_mode(SinkMode::Tx);
                pr_info!("Mode updated to TX");
                Ok(())
            }
            SIOC_MODE_RX => {
                self.set_mode(SinkMode::Rx);
                pr_info!("Mode updated to RX");
                Ok(())
            }
            _ => {
                pr_err!("Invalid IOCTL cmd: {}", cmd);
                Err(NetDeviceError::InvalidCommand)
            }
        }
    }

    fn stats(&self) -> NetDeviceStats {
        self.status.snapshot()
    }
}

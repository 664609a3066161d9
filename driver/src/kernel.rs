//! 宿主内核上下文
//!
//! 驱动需要的内核子系统集中在 [`Kernel`] 中，显式传给模块的加载与卸载函数，
//! 因此一个进程里可以有多套互相独立的“内核”。

use alloc::sync::Arc;

use crate::device::net::NetDeviceRegistry;
use crate::fs::proc::ProcFS;

/// 网络设备注册表加 procfs
pub struct Kernel {
    netdev: Arc<NetDeviceRegistry>,
    procfs: Arc<ProcFS>,
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel {
    /// 启动内核模型：空的设备注册表与空的 /proc
    pub fn new() -> Self {
        Self {
            netdev: Arc::new(NetDeviceRegistry::new()),
            procfs: ProcFS::new(),
        }
    }

    /// 网络设备注册表
    pub fn netdev(&self) -> &Arc<NetDeviceRegistry> {
        &self.netdev
    }

    /// /proc 文件系统
    pub fn procfs(&self) -> &Arc<ProcFS> {
        &self.procfs
    }
}

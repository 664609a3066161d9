//! `AF_PACKET` 原始套接字

use alloc::sync::Arc;

use crate::device::net::{NetDeviceError, NetDeviceRegistry, NetdevTx, SkBuff};

/// 绑定到单个接口的原始套接字
pub struct PacketSocket {
    registry: Arc<NetDeviceRegistry>,
    ifindex: Option<u32>,
}

impl PacketSocket {
    /// 未绑定的套接字
    pub fn new(registry: Arc<NetDeviceRegistry>) -> Self {
        Self {
            registry,
            ifindex: None,
        }
    }

    /// 绑定到 `ifindex`（`sockaddr_ll.sll_ifindex`）
    pub fn bind(&mut self, ifindex: u32) -> Result<(), NetDeviceError> {
        if self.registry.get_by_index(ifindex).is_none() {
            return Err(NetDeviceError::NoDevice);
        }
        self.ifindex = Some(ifindex);
        Ok(())
    }

    /// 发送一个完整的以太网帧，返回发送的字节数
    pub fn sendto(&self, frame: &[u8]) -> Result<usize, NetDeviceError> {
        let ifindex = self.ifindex.ok_or(NetDeviceError::NoDevice)?;
        match self.registry.dev_queue_xmit(ifindex, SkBuff::from_slice(frame))? {
            NetdevTx::Ok => Ok(frame.len()),
            NetdevTx::Busy => Err(NetDeviceError::NetDown),
        }
    }
}

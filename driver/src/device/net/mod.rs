//! 网络设备
//!
//! - [`net_device`]：`net_device_ops` 契约与公共设备状态
//! - [`registry`]：网络设备注册表（接口名、ifindex、up/down）
//! - [`sink_net`]：丢弃一切数据包、只做计数的 sink 设备
//! - [`status`]：sink 设备的 `/proc` 状态文件
pub mod net_device;
pub mod registry;
pub mod sink_net;
pub mod skb;
pub mod status;
pub mod status_store;

#[cfg(test)]
mod tests;

pub use net_device::{
    NetDevice, NetDeviceCore, NetDeviceError, NetDeviceFlags, NetDeviceStats, NetdevTx,
    alloc_netdev,
};
pub use registry::NetDeviceRegistry;
pub use sink_net::{SinkMode, SinkNet};
pub use skb::SkBuff;
pub use status::SinkStatusOps;
pub use status_store::{CounterPair, StatusStore};

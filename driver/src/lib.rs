//! sink-net：一个“黑洞”虚拟网卡驱动
//!
//! 所有交给 `sink%d` 接口发送的数据包都会被直接丢弃，同时在自旋锁保护下
//! 更新收发计数。计数通过 `/proc/sink_net_status` 读写，工作模式（TX/RX）
//! 通过设备私有 ioctl 切换。
//!
//! 宿主内核的协作者（网络设备注册表、procfs、用户缓冲区拷贝、本地中断状态）
//! 以小型内核子系统的形式实现在本 crate 中，驱动通过与 Linux 相同的回调契约
//! 与它们交互：
//!
//! ```text
//! dev_queue_xmit ─► SinkNet::start_xmit ─► StatusStore (spin_lock_irqsave)
//!                                               ▲
//! /proc/sink_net_status ◄─► SinkStatusOps ──────┘
//! SIOCDEVPRIVATE ioctl ─► SinkNet::siocdevprivate ─► SinkMode
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[cfg(test)]
mod test;

pub mod arch;
pub mod config;
pub mod console;
pub mod device;
pub mod fs;
pub mod kernel;
pub mod log;
pub mod module;
pub mod net;
pub mod sync;
pub mod uapi;
pub mod util;
pub mod vfs;

pub use config::{SinkNetConfig, SinkVariant};
pub use device::net::{SinkMode, SinkNet, StatusStore};
pub use kernel::Kernel;
pub use module::{LoadError, SinkNetModule};

//! 网络栈的用户入口
//!
//! - [`ioctl`]：套接字上的接口 ioctl 分发
//! - [`packet`]：`AF_PACKET` 原始套接字，直接把帧交给设备
//! - [`frame`]：构造测试用以太网帧
pub mod frame;
pub mod ioctl;
pub mod packet;

pub use frame::build_probe_frame;
pub use ioctl::dev_ioctl;
pub use packet::PacketSocket;

//! `net_device` 的公共部分
//!
//! 驱动实现 [`NetDevice`]，注册表只通过这个 trait 与驱动交互；
//! [`alloc_netdev`] 负责分配并做以太网默认设置。

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use alloc::{string::String, sync::Arc};
use spin::Once;

use super::skb::SkBuff;
use crate::config::{ETH_ALEN, ETH_DATA_LEN, IFNAMSIZ};
use crate::uapi::errno::*;

/// 网络设备错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetDeviceError {
    /// -ENOMEM
    AllocationFailed,
    /// -EEXIST
    NameExists,
    /// -EINVAL
    InvalidName,
    /// -ENFILE：模板的所有序号都已被占用
    TooManyDevices,
    /// -ENODEV
    NoDevice,
    /// -EOPNOTSUPP
    NotSupported,
    /// -1：私有 ioctl 无法识别
    InvalidCommand,
    /// -ENETDOWN
    NetDown,
}

impl NetDeviceError {
    /// 转换为负的 errno
    pub fn to_errno(&self) -> isize {
        let errno = match self {
            NetDeviceError::AllocationFailed => ENOMEM,
            NetDeviceError::NameExists => EEXIST,
            NetDeviceError::InvalidName => EINVAL,
            NetDeviceError::TooManyDevices => ENFILE,
            NetDeviceError::NoDevice => ENODEV,
            NetDeviceError::NotSupported => EOPNOTSUPP,
            // 沿用驱动的历史返回值，不对应任何 errno
            NetDeviceError::InvalidCommand => return -1,
            NetDeviceError::NetDown => ENETDOWN,
        };
        -(errno as isize)
    }
}

/// `ndo_start_xmit` 的返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetdevTx {
    /// 驱动已接管数据包
    Ok,
    /// 队列忙，调用者稍后重试
    Busy,
}

/// 设备统计（`struct rtnl_link_stats64` 的子集）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetDeviceStats {
    /// 已发送的包数
    pub tx_packets: u64,
    /// 已发送的字节数
    pub tx_bytes: u64,
    /// 已接收的包数
    pub rx_packets: u64,
    /// 已接收的字节数
    pub rx_bytes: u64,
}

bitflags::bitflags! {
    /// 接口标志（`IFF_*`）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NetDeviceFlags: u32 {
        /// 接口已 up
        const IFF_UP        = 0x1;
        /// 支持广播
        const IFF_BROADCAST = 0x2;
        /// 支持组播
        const IFF_MULTICAST = 0x1000;
    }
}

/// 网络设备接口（`struct net_device_ops`）
///
/// 回调都取 `&self`：驱动自己负责内部同步。
pub trait NetDevice: Send + Sync {
    /// 公共设备状态
    fn core(&self) -> &NetDeviceCore;

    /// `ndo_init`，注册时调用一次
    fn init(&self) -> Result<(), NetDeviceError> {
        Ok(())
    }

    /// `ndo_open`，接口 up
    fn open(&self) -> Result<(), NetDeviceError>;

    /// `ndo_stop`，接口 down
    fn stop(&self) -> Result<(), NetDeviceError>;

    /// `ndo_start_xmit`，数据包的所有权转交给驱动
    fn start_xmit(&self, skb: SkBuff) -> NetdevTx;

    /// `ndo_siocdevprivate`，默认不支持
    fn siocdevprivate(&self, _cmd: u32) -> Result<(), NetDeviceError> {
        Err(NetDeviceError::NotSupported)
    }

    /// 设备统计
    fn stats(&self) -> NetDeviceStats;
}

/// 所有网络设备共有的状态（`struct net_device` 中与驱动无关的部分）
pub struct NetDeviceCore {
    name_template: String,
    name: Once<String>,
    /// 0 表示尚未注册
    ifindex: AtomicU32,
    flags: AtomicU32,
    mac: [u8; ETH_ALEN],
    mtu: usize,
    queue_stopped: AtomicBool,
}

impl NetDeviceCore {
    fn new(name_template: &str) -> Self {
        Self {
            name_template: String::from(name_template),
            name: Once::new(),
            ifindex: AtomicU32::new(0),
            flags: AtomicU32::new(0),
            mac: [0; ETH_ALEN],
            mtu: 0,
            queue_stopped: AtomicBool::new(true),
        }
    }

    /// 分配时给定的模板
    pub fn name_template(&self) -> &str {
        &self.name_template
    }

    /// 注册后分配的接口名；注册前为模板本身
    pub fn name(&self) -> &str {
        self.name.get().map_or(self.name_template.as_str(), |n| n.as_str())
    }

    /// 接口索引，0 表示尚未注册
    pub fn ifindex(&self) -> u32 {
        self.ifindex.load(Ordering::Acquire)
    }

    /// 已分配 ifindex
    pub fn is_registered(&self) -> bool {
        self.ifindex() != 0
    }

    /// 硬件地址，sink 设备恒为全 0
    pub fn mac_address(&self) -> [u8; ETH_ALEN] {
        self.mac
    }

    /// 最大传输单元
    pub fn mtu(&self) -> usize {
        self.mtu
    }

    /// `IFF_*` 标志
    pub fn flags(&self) -> NetDeviceFlags {
        NetDeviceFlags::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    /// `IFF_UP`
    pub fn is_up(&self) -> bool {
        self.flags().contains(NetDeviceFlags::IFF_UP)
    }

    pub(super) fn assign(&self, name: String, ifindex: u32) {
        self.name.call_once(|| name);
        self.ifindex.store(ifindex, Ordering::Release);
    }

    pub(super) fn set_up(&self, up: bool) {
        if up {
            self.flags
                .fetch_or(NetDeviceFlags::IFF_UP.bits(), Ordering::AcqRel);
        } else {
            self.flags
                .fetch_and(!NetDeviceFlags::IFF_UP.bits(), Ordering::AcqRel);
        }
    }

    /// 允许上层提交数据包
    pub fn netif_start_queue(&self) {
        self.queue_stopped.store(false, Ordering::Release);
    }

    /// 禁止上层提交数据包
    pub fn netif_stop_queue(&self) {
        self.queue_stopped.store(true, Ordering::Release);
    }

    /// 发送队列是否已停止
    pub fn netif_queue_stopped(&self) -> bool {
        self.queue_stopped.load(Ordering::Acquire)
    }
}

/// 以太网设备的默认设置
fn ether_setup(core: &mut NetDeviceCore) {
    core.mtu = ETH_DATA_LEN;
    *core.flags.get_mut() = (NetDeviceFlags::IFF_BROADCAST | NetDeviceFlags::IFF_MULTICAST).bits();
}

/// 分配网络设备
///
/// `template` 可以包含一个 `%d`，注册时被替换为最小可用序号。
/// `setup` 用经过 `ether_setup` 的公共状态构造驱动私有结构。
///
/// # Errors
/// - `AllocationFailed`: 模板放不进 `IFNAMSIZ`（含结尾 NUL）
pub fn alloc_netdev<D, F>(template: &str, setup: F) -> Result<Arc<D>, NetDeviceError>
where
    D: NetDevice,
    F: FnOnce(NetDeviceCore) -> D,
{
    if template.len() >= IFNAMSIZ {
        return Err(NetDeviceError::AllocationFailed);
    }

    let mut core = NetDeviceCore::new(template);
    ether_setup(&mut core);
    Ok(Arc::new(setup(core)))
}

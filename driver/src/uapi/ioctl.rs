//! 网络 ioctl 请求码与 `struct ifreq`
//!
//! 请求码取自 include/uapi/linux/sockios.h。

use crate::config::{ETH_ALEN, IFNAMSIZ};

/// 获取接口硬件地址/MAC（struct ifreq）
pub const SIOCGIFHWADDR: u32 = 0x8927;

/// 获取接口索引（struct ifreq）
pub const SIOCGIFINDEX: u32 = 0x8933;

/// 设备私有 ioctl 的起始编号，共 16 个
pub const SIOCDEVPRIVATE: u32 = 0x89F0;
/// 设备私有 ioctl 的最后一个编号
pub const SIOCDEVPRIVATE_LAST: u32 = SIOCDEVPRIVATE + 15;

/// sink 设备：后续数据包计入 TX
pub const SIOC_MODE_TX: u32 = SIOCDEVPRIVATE;
/// sink 设备：后续数据包计入 RX
pub const SIOC_MODE_RX: u32 = SIOCDEVPRIVATE + 1;

/// 请求码是否落在设备私有区间
pub const fn is_dev_private(cmd: u32) -> bool {
    cmd >= SIOCDEVPRIVATE && cmd <= SIOCDEVPRIVATE_LAST
}

/// `struct ifreq` 中本驱动用到的部分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IfReq {
    /// 以 NUL 结尾的接口名
    pub ifr_name: [u8; IFNAMSIZ],
    /// 接口索引
    pub ifr_ifindex: i32,
    /// 硬件地址
    pub ifr_hwaddr: [u8; ETH_ALEN],
}

impl IfReq {
    /// 以接口名构造请求，超长部分截断，保证以 NUL 结尾
    pub fn new(name: &str) -> Self {
        let mut ifr_name = [0u8; IFNAMSIZ];
        let len = core::cmp::min(name.len(), IFNAMSIZ - 1);
        ifr_name[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            ifr_name,
            ..Self::default()
        }
    }

    /// 取出 NUL 之前的接口名
    pub fn name(&self) -> &str {
        let end = self
            .ifr_name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(IFNAMSIZ);
        core::str::from_utf8(&self.ifr_name[..end]).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kassert, test_case};

    test_case!(test_private_range, {
        kassert!(SIOC_MODE_TX == 0x89F0);
        kassert!(SIOC_MODE_RX == 0x89F1);
        kassert!(is_dev_private(SIOCDEVPRIVATE_LAST));
        kassert!(!is_dev_private(SIOCDEVPRIVATE_LAST + 1));
        kassert!(!is_dev_private(SIOCGIFINDEX));
    });

    test_case!(test_ifreq_name, {
        kassert!(IfReq::new("sink0").name() == "sink0");
        // 超长名字被截断到 IFNAMSIZ - 1
        kassert!(IfReq::new("a_very_long_interface_name").name().len() == IFNAMSIZ - 1);
    });
}

//! 接口 ioctl 分发
//!
//! 对应内核 `dev_ioctl`：按 `ifr_name` 找到设备，通用请求在这里处理，
//! 设备私有区间交给驱动的 `ndo_siocdevprivate`。

use crate::device::net::NetDeviceRegistry;
use crate::uapi::errno::{ENODEV, ENOTTY};
use crate::uapi::ioctl::{IfReq, SIOCGIFHWADDR, SIOCGIFINDEX, is_dev_private};
use crate::{pr_debug, pr_err};

/// ioctl - 网络接口控制
///
/// # 参数
/// - `registry`: 网络设备注册表
/// - `request`: 请求码
/// - `ifr`: 用户传入的 `struct ifreq`，查询结果写回其中
///
/// # 返回值
/// - 成功: 0
/// - 失败: 负的 errno；私有 ioctl 的错误码由驱动决定
///
/// # 支持的操作
/// - `SIOCGIFINDEX` - 获取接口索引
/// - `SIOCGIFHWADDR` - 获取接口 MAC
/// - `SIOCDEVPRIVATE..=SIOCDEVPRIVATE+15` - 设备私有命令
pub fn dev_ioctl(registry: &NetDeviceRegistry, request: u32, ifr: &mut IfReq) -> isize {
    pr_debug!("ioctl: if={}, request={:#x}", ifr.name(), request);

    let Some(dev) = registry.get_by_name(ifr.name()) else {
        pr_err!("ioctl: no such device {}", ifr.name());
        return -(ENODEV as isize);
    };

    match request {
        SIOCGIFINDEX => {
            ifr.ifr_ifindex = dev.core().ifindex() as i32;
            0
        }
        SIOCGIFHWADDR => {
            ifr.ifr_hwaddr = dev.core().mac_address();
            0
        }
        cmd if is_dev_private(cmd) => match dev.siocdevprivate(cmd) {
            Ok(()) => 0,
            Err(err) => {
                pr_debug!("ioctl: {} rejected {:#x}: {:?}", ifr.name(), cmd, err);
                err.to_errno()
            }
        },
        _ => {
            pr_debug!("ioctl: unsupported request {:#x}", request);
            -(ENOTTY as isize)
        }
    }
}

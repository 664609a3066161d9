//! 驱动常量与加载参数
//!
//! 常量部分与平台无关；[`SinkNetConfig`] 相当于内核模块的 module_param，
//! 在 [`SinkNetModule::init`](crate::module::SinkNetModule::init) 时传入。

use alloc::string::String;

use crate::vfs::FileMode;

// about the status pseudo-file
/// 状态文件名，位于 /proc 下
pub const PROCFS_STATUS_ENTRY: &str = "sink_net_status";
/// 状态报告与写入缓冲区的容量（字节）
pub const PROCFS_STATUS_SIZE: usize = 256;
/// 状态文件权限，所有用户可读写
pub const PROCFS_STATUS_MODE: u32 = 0o666;
/// proc 条目名的最大长度
pub const PROC_NAME_MAX: usize = 255;

// about the network device
/// 接口名模板，注册时 `%d` 被替换为最小可用序号
pub const SINK_NAME_TEMPLATE: &str = "sink%d";
/// 接口名最大长度，包含结尾的 NUL
pub const IFNAMSIZ: usize = 16;
/// 以太网 MTU
pub const ETH_DATA_LEN: usize = 1500;
/// 以太网帧头长度
pub const ETH_HLEN: usize = 14;
/// MAC 地址长度
pub const ETH_ALEN: usize = 6;
/// `%d` 模板可分配的最大序号
pub const MAX_NETDEV_INDEX: usize = 32768;

/// 驱动变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkVariant {
    /// TX/RX 计数可切换，带私有 ioctl
    #[default]
    ModeSwitch,
    /// 只统计 TX，没有 ioctl
    TxOnly,
}

/// 模块加载参数
#[derive(Debug, Clone)]
pub struct SinkNetConfig {
    /// 驱动变体
    pub variant: SinkVariant,
    /// 接口名模板
    pub name_template: String,
    /// 状态文件名
    pub status_entry: String,
    /// 状态文件权限位
    pub status_mode: FileMode,
    /// 读取状态时是否持锁；默认不持锁，读者可能看到写了一半的计数对
    pub locked_reads: bool,
}

impl Default for SinkNetConfig {
    fn default() -> Self {
        Self {
            variant: SinkVariant::ModeSwitch,
            name_template: String::from(SINK_NAME_TEMPLATE),
            status_entry: String::from(PROCFS_STATUS_ENTRY),
            status_mode: FileMode::from_bits_truncate(PROCFS_STATUS_MODE),
            locked_reads: false,
        }
    }
}

impl SinkNetConfig {
    /// 指定变体，其余取默认值
    pub fn with_variant(variant: SinkVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}

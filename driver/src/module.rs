//! 模块加载与卸载
//!
//! 加载顺序：分配设备 -> 注册设备 -> 创建 `/proc` 条目。任一步失败时撤销之前的步骤。
//! 卸载顺序相反：先移除 `/proc` 条目，再注销设备。

use alloc::{string::String, sync::Arc};

use crate::config::SinkNetConfig;
use crate::device::net::{NetDevice, NetDeviceError, SinkNet, SinkStatusOps, alloc_netdev};
use crate::kernel::Kernel;
use crate::uapi::errno::ENOENT;
use crate::vfs::FsError;
use crate::{pr_err, pr_info};

/// 模块加载失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// `alloc_netdev` 失败
    Alloc(NetDeviceError),
    /// `register_netdevice` 失败
    Register(NetDeviceError),
    /// `proc_create` 失败
    ProcCreate(FsError),
}

impl LoadError {
    /// 模块 init 返回给 insmod 的错误码
    pub fn to_errno(&self) -> isize {
        match self {
            LoadError::Alloc(err) | LoadError::Register(err) => err.to_errno(),
            // proc_create 只报告 NULL，不区分原因
            LoadError::ProcCreate(_) => -(ENOENT as isize),
        }
    }
}

/// 已加载的 sink 模块
pub struct SinkNetModule {
    dev: Arc<SinkNet>,
    status_entry: String,
}

impl SinkNetModule {
    /// module_init
    pub fn init(kernel: &Kernel, config: SinkNetConfig) -> Result<Self, LoadError> {
        let variant = config.variant;
        let dev = alloc_netdev(&config.name_template, |core| SinkNet::new(core, variant))
            .map_err(LoadError::Alloc)?;

        if let Err(err) = kernel.netdev().register_netdevice(dev.clone()) {
            pr_err!(
                "Failed to register sink net device. return code: {}",
                err.to_errno()
            );
            // 设备随 dev 一起释放（free_netdev）
            return Err(LoadError::Register(err));
        }

        let ops = Arc::new(SinkStatusOps::new(dev.clone(), config.locked_reads));
        if let Err(err) = kernel
            .procfs()
            .proc_create(&config.status_entry, config.status_mode, ops)
        {
            pr_err!("Failed to create {} procfs entry.", config.status_entry);
            if let Err(unreg) = kernel.netdev().unregister_netdev(dev.core().name()) {
                pr_err!("Failed to unregister {}: {:?}", dev.core().name(), unreg);
            }
            return Err(LoadError::ProcCreate(err));
        }

        Ok(Self {
            dev,
            status_entry: config.status_entry,
        })
    }

    /// module_exit
    pub fn exit(self, kernel: &Kernel) {
        pr_info!("Cleaning up sink net module");
        if let Err(err) = kernel.procfs().remove_proc_entry(&self.status_entry) {
            pr_err!("Failed to remove {}: {:?}", self.status_entry, err);
        }
        if let Err(err) = kernel.netdev().unregister_netdev(self.dev.core().name()) {
            pr_err!("Failed to unregister {}: {:?}", self.dev.core().name(), err);
        }
    }

    /// 已注册的 sink 设备
    pub fn device(&self) -> &Arc<SinkNet> {
        &self.dev
    }

    /// 注册后分配的接口名，例如 `sink0`
    pub fn ifname(&self) -> &str {
        self.dev.core().name()
    }

    /// 状态文件在 /proc 下的名字
    pub fn status_entry(&self) -> &str {
        &self.status_entry
    }
}

//! 网络设备注册表
//!
//! 负责接口名分配（`sink%d` -> `sink0`、`sink1` …）、ifindex 分配、
//! up/down 状态以及把数据包交给设备的 `start_xmit`。

use alloc::{
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use hashbrown::HashMap;

use super::net_device::{NetDevice, NetDeviceError, NetdevTx};
use super::skb::SkBuff;
use crate::config::{IFNAMSIZ, MAX_NETDEV_INDEX};
use crate::sync::{IntrGuard, SpinLock};
use crate::{pr_debug, pr_info};

struct RegistryInner {
    by_name: HashMap<String, Arc<dyn NetDevice>>,
    by_index: HashMap<u32, String>,
    next_ifindex: u32,
}

/// 已注册的网络设备
pub struct NetDeviceRegistry {
    inner: SpinLock<RegistryInner>,
}

impl Default for NetDeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 合法的接口名：非空、放得进 `IFNAMSIZ`、不是 `.`/`..`、不含 `/`、`:` 和空白
fn dev_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() < IFNAMSIZ
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c == '/' || c == ':' || c.is_whitespace())
}

impl RegistryInner {
    /// `dev_alloc_name`：把模板中的 `%d` 替换为最小可用序号
    fn alloc_name(&self, template: &str) -> Result<String, NetDeviceError> {
        match template.matches('%').count() {
            0 => {
                if !dev_valid_name(template) {
                    return Err(NetDeviceError::InvalidName);
                }
                if self.by_name.contains_key(template) {
                    return Err(NetDeviceError::NameExists);
                }
                Ok(template.to_string())
            }
            1 if template.contains("%d") => {
                for i in 0..MAX_NETDEV_INDEX {
                    let candidate = template.replacen("%d", &i.to_string(), 1);
                    if !dev_valid_name(&candidate) {
                        return Err(NetDeviceError::InvalidName);
                    }
                    if !self.by_name.contains_key(&candidate) {
                        return Ok(candidate);
                    }
                }
                Err(NetDeviceError::TooManyDevices)
            }
            _ => Err(NetDeviceError::InvalidName),
        }
    }
}

impl NetDeviceRegistry {
    /// 空注册表，ifindex 从 1 开始
    pub fn new() -> Self {
        Self {
            inner: SpinLock::new(RegistryInner {
                by_name: HashMap::new(),
                by_index: HashMap::new(),
                next_ifindex: 1,
            }),
        }
    }

    /// 注册设备：选出接口名和 ifindex，`ndo_init` 成功后写入设备
    ///
    /// # Errors
    /// - `NameExists`: 固定名字已被占用，或设备已经注册过
    /// - `InvalidName`: 模板非法
    /// - `TooManyDevices`: 模板的所有序号都已被占用
    /// - `ndo_init` 返回的错误
    pub fn register_netdevice(&self, dev: Arc<dyn NetDevice>) -> Result<(), NetDeviceError> {
        if dev.core().is_registered() {
            return Err(NetDeviceError::NameExists);
        }

        let mut inner = self.inner.lock();
        let name = inner.alloc_name(dev.core().name_template())?;
        let ifindex = inner.next_ifindex;

        // 名字只能写入一次，`ndo_init` 失败时设备必须保持未注册的样子
        dev.init()?;
        dev.core().assign(name.clone(), ifindex);

        inner.next_ifindex += 1;
        inner.by_index.insert(ifindex, name.clone());
        inner.by_name.insert(name.clone(), dev);
        pr_info!("netdev: registered {} (ifindex {})", name, ifindex);
        Ok(())
    }

    /// 注销设备，处于 up 状态时先关闭
    pub fn unregister_netdev(&self, name: &str) -> Result<Arc<dyn NetDevice>, NetDeviceError> {
        let dev = {
            let mut inner = self.inner.lock();
            let dev = inner.by_name.remove(name).ok_or(NetDeviceError::NoDevice)?;
            inner.by_index.remove(&dev.core().ifindex());
            dev
        };

        if dev.core().is_up() {
            dev.stop()?;
            dev.core().set_up(false);
        }
        pr_info!("netdev: unregistered {}", name);
        Ok(dev)
    }

    /// `ip link set <name> up`
    pub fn dev_open(&self, name: &str) -> Result<(), NetDeviceError> {
        let dev = self.get_by_name(name).ok_or(NetDeviceError::NoDevice)?;
        if dev.core().is_up() {
            return Ok(());
        }
        dev.open()?;
        dev.core().set_up(true);
        Ok(())
    }

    /// `ip link set <name> down`
    pub fn dev_close(&self, name: &str) -> Result<(), NetDeviceError> {
        let dev = self.get_by_name(name).ok_or(NetDeviceError::NoDevice)?;
        if !dev.core().is_up() {
            return Ok(());
        }
        dev.stop()?;
        dev.core().set_up(false);
        Ok(())
    }

    /// 把数据包交给 `ifindex` 对应的设备
    ///
    /// 设备 down 或队列停止时数据包被丢弃并返回 `NetDown`。
    pub fn dev_queue_xmit(&self, ifindex: u32, skb: SkBuff) -> Result<NetdevTx, NetDeviceError> {
        let dev = self.get_by_index(ifindex).ok_or(NetDeviceError::NoDevice)?;
        let core = dev.core();

        if !core.is_up() || core.netif_queue_stopped() {
            pr_debug!("netdev: {} is down, dropping {} byte frame", core.name(), skb.len());
            return Err(NetDeviceError::NetDown);
        }

        // 驱动的发送回调在关中断上下文中执行
        let _guard = IntrGuard::new();
        Ok(dev.start_xmit(skb))
    }

    /// 按接口名查找
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn NetDevice>> {
        self.inner.lock().by_name.get(name).cloned()
    }

    /// 按 ifindex 查找
    pub fn get_by_index(&self, ifindex: u32) -> Option<Arc<dyn NetDevice>> {
        let inner = self.inner.lock();
        let name = inner.by_index.get(&ifindex)?;
        inner.by_name.get(name).cloned()
    }

    /// 按名字排序的接口列表
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.lock().by_name.keys().cloned().collect();
        names.sort();
        names
    }
}

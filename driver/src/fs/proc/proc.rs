//! `/proc` 目录：条目的创建、删除与打开

use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};

use crate::{
    config::PROC_NAME_MAX,
    fs::proc::{ProcEntry, ProcFile, ProcOps},
    pr_debug,
    sync::SpinLock,
    vfs::{FileMode, FsError, OpenFlags},
};

/// 扁平的 `/proc` 目录
pub struct ProcFS {
    entries: SpinLock<BTreeMap<String, Arc<ProcEntry>>>,
}

impl ProcFS {
    /// 创建新的 ProcFS 实例
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: SpinLock::new(BTreeMap::new()),
        })
    }

    /// 注册 `/proc/<name>`
    ///
    /// # Errors
    /// - `InvalidArgument`: 名字为空或包含 `/`
    /// - `NameTooLong`: 名字超过 255 字节
    /// - `AlreadyExists`: 同名条目已存在
    pub fn proc_create(
        &self,
        name: &str,
        mode: FileMode,
        ops: Arc<dyn ProcOps>,
    ) -> Result<Arc<ProcEntry>, FsError> {
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidArgument);
        }
        if name.len() > PROC_NAME_MAX {
            return Err(FsError::NameTooLong);
        }

        let mut entries = self.entries.lock();
        if entries.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }

        let entry = ProcEntry::new(name, mode, ops);
        entries.insert(String::from(name), entry.clone());
        pr_debug!("proc: created /proc/{} mode {:o}", name, mode.permissions());
        Ok(entry)
    }

    /// 移除 `/proc/<name>`，已打开的会话随后读写都返回 `IoError`
    pub fn remove_proc_entry(&self, name: &str) -> Result<(), FsError> {
        let entry = self.entries.lock().remove(name).ok_or(FsError::NotFound)?;
        entry.mark_removed();
        pr_debug!("proc: removed /proc/{}", name);
        Ok(())
    }

    /// 打开 `/proc/<name>`
    ///
    /// 调用者按非特权用户对待，检查 other 权限位。
    pub fn open(&self, name: &str, flags: OpenFlags) -> Result<Arc<ProcFile>, FsError> {
        let entry = self.lookup(name).ok_or(FsError::NotFound)?;
        let mode = entry.mode();

        if (flags.readable() && !mode.can_read()) || (flags.writable() && !mode.can_write()) {
            return Err(FsError::PermissionDenied);
        }

        Ok(Arc::new(ProcFile::new(entry, flags)))
    }

    /// 按名字查找条目
    pub fn lookup(&self, name: &str) -> Option<Arc<ProcEntry>> {
        self.entries.lock().get(name).cloned()
    }

    /// 按名字排序的条目列表
    pub fn list(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }
}

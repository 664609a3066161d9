//! proc 条目与 `proc_ops` 回调

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use alloc::{string::String, sync::Arc};

use crate::{
    util::{UserBuffer, UserSlice},
    vfs::{FileMode, FsError, InodeMetadata, SeekWhence},
};

/// 对应内核的 `struct proc_ops`
///
/// `offset` 是打开会话的位置（`loff_t`），由 [`ProcFile`](super::ProcFile) 持有，
/// 回调可以读取并推进它。
pub trait ProcOps: Send + Sync {
    /// 读取到用户缓冲区，返回产生的字节数
    fn proc_read(&self, buf: &mut UserBuffer<'_>, offset: &mut i64) -> Result<usize, FsError>;

    /// 从用户缓冲区写入
    ///
    /// 默认返回 `IoError`，与未提供 `proc_write` 的内核条目一致。
    fn proc_write(&self, _buf: &UserSlice<'_>, _offset: &mut i64) -> Result<usize, FsError> {
        Err(FsError::IoError)
    }

    /// 计算新的位置，默认走 [`generic_file_llseek`]
    fn proc_lseek(&self, pos: i64, offset: i64, whence: u32) -> Result<i64, FsError> {
        // proc 文件总是 size = 0
        generic_file_llseek(pos, offset, whence, 0)
    }
}

/// 通用的 llseek
///
/// 结果为负或溢出时返回 `InvalidArgument`；未知的 `whence` 同样如此。
pub fn generic_file_llseek(pos: i64, offset: i64, whence: u32, size: i64) -> Result<i64, FsError> {
    let new_pos = match SeekWhence::from_raw(whence).ok_or(FsError::InvalidArgument)? {
        SeekWhence::Set => Some(offset),
        // 只查询位置
        SeekWhence::Cur if offset == 0 => return Ok(pos),
        SeekWhence::Cur => pos.checked_add(offset),
        SeekWhence::End => size.checked_add(offset),
    };

    match new_pos {
        Some(p) if p >= 0 => Ok(p),
        _ => Err(FsError::InvalidArgument),
    }
}

/// 全局 Inode 编号分配器
static NEXT_INODE_NO: AtomicUsize = AtomicUsize::new(1);

/// `/proc` 下的一个条目
pub struct ProcEntry {
    name: String,
    inode_no: usize,
    mode: FileMode,
    ops: Arc<dyn ProcOps>,
    /// `remove_proc_entry` 之后置位，仍打开的会话从此返回 -EIO
    removed: AtomicBool,
}

impl ProcEntry {
    pub(super) fn new(name: &str, mode: FileMode, ops: Arc<dyn ProcOps>) -> Arc<Self> {
        Arc::new(Self {
            name: String::from(name),
            inode_no: NEXT_INODE_NO.fetch_add(1, Ordering::Relaxed),
            mode,
            ops,
            removed: AtomicBool::new(false),
        })
    }

    /// 条目名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 创建时给定的权限位
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// 条目的回调
    pub fn ops(&self) -> &Arc<dyn ProcOps> {
        &self.ops
    }

    /// 已经 `remove_proc_entry`
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Acquire)
    }

    pub(super) fn mark_removed(&self) {
        self.removed.store(true, Ordering::Release);
    }

    /// 条目元数据
    pub fn metadata(&self) -> InodeMetadata {
        InodeMetadata {
            inode_no: self.inode_no,
            mode: self.mode | FileMode::S_IFREG,
            size: 0,
        }
    }
}

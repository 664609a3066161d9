//! procfs 的打开会话

use alloc::sync::Arc;

use crate::{
    fs::proc::ProcEntry,
    sync::SpinLock,
    util::{UserBuffer, UserSlice},
    vfs::{File, FsError, InodeMetadata, OpenFlags},
};

/// 一次 `open` 得到的会话，持有自己的 offset
pub struct ProcFile {
    entry: Arc<ProcEntry>,
    offset: SpinLock<i64>,
    flags: OpenFlags,
}

impl ProcFile {
    /// 新会话，offset 为 0
    pub fn new(entry: Arc<ProcEntry>, flags: OpenFlags) -> Self {
        Self {
            entry,
            offset: SpinLock::new(0),
            flags,
        }
    }

    /// 会话对应的条目
    pub fn entry(&self) -> &Arc<ProcEntry> {
        &self.entry
    }

    fn check_alive(&self) -> Result<(), FsError> {
        if self.entry.is_removed() {
            return Err(FsError::IoError);
        }
        Ok(())
    }
}

impl File for ProcFile {
    fn readable(&self) -> bool {
        self.flags.readable()
    }

    fn writable(&self) -> bool {
        self.flags.writable()
    }

    fn read(&self, buf: &mut UserBuffer<'_>) -> Result<usize, FsError> {
        if !self.readable() {
            return Err(FsError::BadFileDescriptor);
        }
        self.check_alive()?;

        let mut pos = self.offset.lock();
        self.entry.ops().proc_read(buf, &mut *pos)
    }

    fn write(&self, buf: &UserSlice<'_>) -> Result<usize, FsError> {
        if !self.writable() {
            return Err(FsError::BadFileDescriptor);
        }
        self.check_alive()?;

        let mut pos = self.offset.lock();
        self.entry.ops().proc_write(buf, &mut *pos)
    }

    fn metadata(&self) -> Result<InodeMetadata, FsError> {
        self.check_alive()?;
        Ok(self.entry.metadata())
    }

    fn lseek(&self, offset: i64, whence: u32) -> Result<i64, FsError> {
        self.check_alive()?;

        let mut pos = self.offset.lock();
        let new_pos = self.entry.ops().proc_lseek(*pos, offset, whence)?;
        *pos = new_pos;
        Ok(new_pos)
    }

    fn offset(&self) -> i64 {
        *self.offset.lock()
    }

    fn flags(&self) -> OpenFlags {
        self.flags
    }
}

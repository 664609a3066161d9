use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::fs::proc::{ProcFS, ProcOps};
use crate::sync::SpinLock;
use crate::util::{UserBuffer, UserSlice};
use crate::vfs::{FileMode, FsError};

/// 每个用例一个独立的 /proc
pub fn create_test_procfs() -> Arc<ProcFS> {
    ProcFS::new()
}

/// 只读的静态条目：整段内容一次读完，offset 推进到末尾
pub struct StaticOps(pub &'static [u8]);

impl ProcOps for StaticOps {
    fn proc_read(&self, buf: &mut UserBuffer<'_>, offset: &mut i64) -> Result<usize, FsError> {
        let start = *offset as usize;
        if start >= self.0.len() {
            return Ok(0);
        }
        let chunk = &self.0[start..core::cmp::min(self.0.len(), start + buf.len())];
        if buf.copy_to_user(chunk) != 0 {
            return Err(FsError::Fault);
        }
        *offset += chunk.len() as i64;
        Ok(chunk.len())
    }
}

/// 记录最后一次写入的条目
#[derive(Default)]
pub struct RecordingOps {
    pub last: SpinLock<Vec<u8>>,
}

impl ProcOps for RecordingOps {
    fn proc_read(&self, _buf: &mut UserBuffer<'_>, _offset: &mut i64) -> Result<usize, FsError> {
        Ok(0)
    }

    fn proc_write(&self, buf: &UserSlice<'_>, offset: &mut i64) -> Result<usize, FsError> {
        let mut data = alloc::vec![0u8; buf.len()];
        if buf.copy_from_user(&mut data) != 0 {
            return Err(FsError::Fault);
        }
        *self.last.lock() = data;
        *offset += buf.len() as i64;
        Ok(buf.len())
    }
}

pub fn rw_mode() -> FileMode {
    FileMode::from_bits_truncate(0o666)
}

pub mod proc_basic;
pub mod proc_file;
pub mod proc_seek;

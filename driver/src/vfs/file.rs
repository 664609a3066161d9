//! 打开的文件
//!
//! 一个 [`File`] 对应一次 `open` 产生的会话。偏移量由实现者自己保存，
//! 读写经由 [`UserBuffer`] / [`UserSlice`] 跨越用户态边界，可能只拷贝了一部分。

use crate::util::user_buffer::{UserBuffer, UserSlice};
use crate::vfs::{FsError, InodeMetadata};

/// 文件会话
///
/// 偏移量使用与 `loff_t` 相同的 `i64`。
pub trait File: Send + Sync {
    /// 会话是否允许读
    fn readable(&self) -> bool;

    /// 会话是否允许写
    fn writable(&self) -> bool;

    /// 读取到 `buf`，返回写入用户缓冲区的字节数；0 表示 EOF
    fn read(&self, buf: &mut UserBuffer<'_>) -> Result<usize, FsError>;

    /// 返回已消耗的字节数
    fn write(&self, buf: &UserSlice<'_>) -> Result<usize, FsError>;

    /// 条目元数据
    fn metadata(&self) -> Result<InodeMetadata, FsError>;

    /// `whence` 原样传入，由实现者决定接受哪些取值
    fn lseek(&self, _offset: i64, _whence: u32) -> Result<i64, FsError> {
        Err(FsError::NotSupported)
    }

    /// 当前偏移量
    fn offset(&self) -> i64 {
        0
    }

    /// 打开时的标志
    fn flags(&self) -> OpenFlags {
        OpenFlags::empty()
    }
}

/// `lseek` 的 `SEEK_*` 取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// `SEEK_SET`
    Set,
    /// `SEEK_CUR`
    Cur,
    /// `SEEK_END`
    End,
}

impl SeekWhence {
    /// `SEEK_DATA`/`SEEK_HOLE` 等其它取值返回 `None`
    pub fn from_raw(value: u32) -> Option<Self> {
        [Self::Set, Self::Cur, Self::End].get(value as usize).copied()
    }
}

bitflags::bitflags! {
    /// `open(2)` 标志，这里只用到访问模式
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只读
        const O_RDONLY = 0;
        /// 只写
        const O_WRONLY = 1;
        /// 读写
        const O_RDWR = 2;
        /// 访问模式掩码
        const O_ACCMODE = 3;
    }
}

impl OpenFlags {
    fn access_mode(&self) -> u32 {
        self.bits() & Self::O_ACCMODE.bits()
    }

    /// `O_RDONLY` 或 `O_RDWR`
    pub fn readable(&self) -> bool {
        self.access_mode() != Self::O_WRONLY.bits()
    }

    /// `O_WRONLY` 或 `O_RDWR`
    pub fn writable(&self) -> bool {
        matches!(self.access_mode(), 1 | 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kassert, test_case};

    test_case!(test_access_mode_of_open_flags, {
        kassert!(OpenFlags::O_RDONLY.readable() && !OpenFlags::O_RDONLY.writable());
        kassert!(OpenFlags::O_WRONLY.writable() && !OpenFlags::O_WRONLY.readable());
        kassert!(OpenFlags::O_RDWR.readable() && OpenFlags::O_RDWR.writable());
    });

    test_case!(test_unknown_whence_rejected, {
        kassert!(SeekWhence::from_raw(1) == Some(SeekWhence::Cur));
        kassert!(SeekWhence::from_raw(3).is_none());
        kassert!(SeekWhence::from_raw(u32::MAX).is_none());
    });
}

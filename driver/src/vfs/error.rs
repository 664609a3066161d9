//! 文件操作错误，返回用户态前经 [`FsError::to_errno`] 变成负 errno。

use crate::uapi::errno::*;

/// 文件操作错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// ENOENT
    NotFound,
    /// EEXIST：同名 proc 条目已存在
    AlreadyExists,
    /// EACCES：权限位不允许以该方式打开
    PermissionDenied,
    /// EBADF：打开方式不允许读或写
    BadFileDescriptor,
    /// EINVAL
    InvalidArgument,
    /// ENAMETOOLONG
    NameTooLong,
    /// EFBIG：写入超过条目容量
    InputTooLarge,
    /// EFAULT：用户内存不可访问，或写入内容解析失败
    Fault,
    /// EIO：条目已被移除，或条目不支持该操作
    IoError,
    /// EOPNOTSUPP
    NotSupported,
}

impl FsError {
    /// 负的 errno
    pub fn to_errno(&self) -> isize {
        let errno = match self {
            Self::NotFound => ENOENT,
            Self::AlreadyExists => EEXIST,
            Self::PermissionDenied => EACCES,
            Self::BadFileDescriptor => EBADF,
            Self::InvalidArgument => EINVAL,
            Self::NameTooLong => ENAMETOOLONG,
            Self::InputTooLarge => EFBIG,
            Self::Fault => EFAULT,
            Self::IoError => EIO,
            Self::NotSupported => EOPNOTSUPP,
        };
        -(errno as isize)
    }
}

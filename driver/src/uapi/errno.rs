//! errno 值（asm-generic/errno-base.h 与 errno.h 的子集）

/// No such file or directory
pub const ENOENT: i32 = 2;
/// I/O error
pub const EIO: i32 = 5;
/// Bad file number
pub const EBADF: i32 = 9;
/// Out of memory
pub const ENOMEM: i32 = 12;
/// Permission denied
pub const EACCES: i32 = 13;
/// Bad address
pub const EFAULT: i32 = 14;
/// File exists
pub const EEXIST: i32 = 17;
/// No such device
pub const ENODEV: i32 = 19;
/// Invalid argument
pub const EINVAL: i32 = 22;
/// File table overflow
pub const ENFILE: i32 = 23;
/// Not a typewriter
pub const ENOTTY: i32 = 25;
/// File too large
pub const EFBIG: i32 = 27;
/// File name too long
pub const ENAMETOOLONG: i32 = 36;
/// Operation not supported on transport endpoint
pub const EOPNOTSUPP: i32 = 95;
/// Network is down
pub const ENETDOWN: i32 = 100;

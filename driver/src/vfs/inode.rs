//! 权限位与元数据

bitflags::bitflags! {
    /// `st_mode`：类型位加上 rw 权限位（proc 文件没有 x 位）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileMode: u32 {
        /// 类型位掩码
        const S_IFMT = 0o170000;
        /// 普通文件
        const S_IFREG = 0o100000;

        /// 属主读
        const S_IRUSR = 0o400;
        /// 属主写
        const S_IWUSR = 0o200;
        /// 组读
        const S_IRGRP = 0o040;
        /// 组写
        const S_IWGRP = 0o020;
        /// 其他用户读
        const S_IROTH = 0o004;
        /// 其他用户写
        const S_IWOTH = 0o002;
    }
}

impl FileMode {
    /// 驱动里的打开者都按非特权用户对待，只看 other 位
    pub fn can_read(&self) -> bool {
        self.contains(Self::S_IROTH)
    }

    /// other 用户可写
    pub fn can_write(&self) -> bool {
        self.contains(Self::S_IWOTH)
    }

    /// 去掉类型位后的权限部分，`0o666` 之类
    pub fn permissions(&self) -> u32 {
        self.bits() & !Self::S_IFMT.bits()
    }
}

/// `stat` 所需的元数据
#[derive(Debug, Clone)]
pub struct InodeMetadata {
    /// 条目编号
    pub inode_no: usize,
    /// 类型位与权限位
    pub mode: FileMode,
    /// proc 条目恒为 0
    pub size: usize,
}

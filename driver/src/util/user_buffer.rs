//! 用户态缓冲区
//!
//! 用户态程序通过一段位于用户地址的缓冲区与内核交换数据。这里用借用的切片加上
//! “可访问前缀”的长度来描述这段内存：超过前缀的部分视为未映射，访问即缺页失败。
//!
//! 与内核的 `copy_to_user` / `copy_from_user` 一致，拷贝函数返回**未能拷贝**的字节数，
//! 0 表示全部成功。

use core::cmp::min;

/// 读操作的目标缓冲区（内核 -> 用户）
pub struct UserBuffer<'a> {
    data: &'a mut [u8],
    accessible: usize,
}

impl<'a> UserBuffer<'a> {
    /// 创建一个完全可访问的用户缓冲区
    pub fn new(data: &'a mut [u8]) -> Self {
        let accessible = data.len();
        Self { data, accessible }
    }

    /// 从第 `offset` 字节起的内存不可访问
    pub fn with_fault_at(mut self, offset: usize) -> Self {
        self.accessible = min(offset, self.data.len());
        self
    }

    /// 将内核数据拷贝到用户缓冲区开头
    ///
    /// 返回未拷贝的字节数。超出缓冲区长度或落在不可访问区域的部分都不会被拷贝。
    pub fn copy_to_user(&mut self, src: &[u8]) -> usize {
        let copied = min(src.len(), self.accessible);
        self.data[..copied].copy_from_slice(&src[..copied]);
        src.len() - copied
    }

    /// 调用者请求的长度
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 判断用户缓冲区是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 写操作的数据源（用户 -> 内核）
pub struct UserSlice<'a> {
    data: &'a [u8],
    accessible: usize,
}

impl<'a> UserSlice<'a> {
    /// 创建一个完全可访问的用户数据源
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            accessible: data.len(),
        }
    }

    /// 从第 `offset` 字节起的内存不可访问
    pub fn with_fault_at(mut self, offset: usize) -> Self {
        self.accessible = min(offset, self.data.len());
        self
    }

    /// 从用户内存拷贝 `dst.len()` 字节到内核缓冲区
    ///
    /// 返回未拷贝的字节数；未拷贝的尾部被清零。
    pub fn copy_from_user(&self, dst: &mut [u8]) -> usize {
        let copied = min(dst.len(), self.accessible);
        dst[..copied].copy_from_slice(&self.data[..copied]);
        dst[copied..].fill(0);
        dst.len() - copied
    }

    /// 调用者声明的长度
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 判断是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kassert, test_case};

    test_case!(test_copy_to_user_full, {
        let mut mem = [0u8; 8];
        let mut buf = UserBuffer::new(&mut mem);
        kassert!(buf.copy_to_user(b"abcd") == 0);
        kassert!(&mem[..4] == b"abcd");
    });

    test_case!(test_copy_to_user_partial_fault, {
        let mut mem = [0u8; 8];
        let mut buf = UserBuffer::new(&mut mem).with_fault_at(3);
        kassert!(buf.copy_to_user(b"abcdef") == 3);
        kassert!(&mem[..3] == b"abc");
        kassert!(mem[3] == 0);
    });

    test_case!(test_copy_to_user_longer_than_buffer, {
        let mut mem = [0u8; 2];
        let mut buf = UserBuffer::new(&mut mem);
        kassert!(buf.copy_to_user(b"xyz") == 1);
    });

    test_case!(test_copy_from_user_fault_zero_fills, {
        let src = UserSlice::new(b"12 34").with_fault_at(2);
        let mut dst = [0xffu8; 5];
        kassert!(src.copy_from_user(&mut dst) == 3);
        kassert!(dst == [b'1', b'2', 0, 0, 0]);
    });
}

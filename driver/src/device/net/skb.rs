//! 套接字缓冲区

use alloc::vec::Vec;

use crate::arch::timer::get_time_us;

/// 待发送的数据帧（`struct sk_buff` 的最小形态）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkBuff {
    data: Vec<u8>,
    /// 软件发送时间戳（微秒）
    tstamp: Option<usize>,
}

impl SkBuff {
    /// 以 `data` 作为帧内容
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, tstamp: None }
    }

    /// 拷贝 `data`
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }

    /// 帧长度（`skb->len`）
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 空帧
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 帧内容
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// 软件发送时间戳（微秒）
    pub fn tx_timestamp(&self) -> Option<usize> {
        self.tstamp
    }
}

/// 记录软件发送时间戳
pub fn skb_tx_timestamp(skb: &mut SkBuff) {
    skb.tstamp = Some(get_time_us());
}

/// 释放数据包
pub fn dev_kfree_skb(skb: SkBuff) {
    drop(skb);
}

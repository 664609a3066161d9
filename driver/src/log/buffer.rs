//! 日志环形缓冲区
//!
//! 容量固定；写满后覆盖最旧的条目并累计丢弃计数。

use alloc::collections::VecDeque;

use super::entry::LogEntry;
use crate::sync::SpinLock;

/// 有界日志缓冲区
pub struct LogBuffer {
    inner: SpinLock<Ring>,
}

struct Ring {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    dropped: usize,
}

impl LogBuffer {
    /// 容量为 `capacity` 条
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: SpinLock::new(Ring {
                entries: VecDeque::with_capacity(capacity),
                capacity,
                dropped: 0,
            }),
        }
    }

    /// 缓冲区已满时丢弃最旧的一条
    pub fn push(&self, entry: LogEntry) {
        let mut ring = self.inner.lock();
        if ring.capacity == 0 {
            ring.dropped += 1;
            return;
        }
        if ring.entries.len() == ring.capacity {
            ring.entries.pop_front();
            ring.dropped += 1;
        }
        ring.entries.push_back(entry);
    }

    /// 取出最旧的一条
    pub fn pop(&self) -> Option<LogEntry> {
        self.inner.lock().entries.pop_front()
    }

    /// 未读条数
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// 没有未读条目
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 被覆盖的总条数
    pub fn dropped(&self) -> usize {
        self.inner.lock().dropped
    }
}

//! `/proc/sink_net_status`
//!
//! 读：生成一次性的文本报告，offset 大于 0 时返回 EOF。
//! 写：`"<packets> <bytes>"`，覆盖当前模式对应的计数对。
//!
//! ```text
//! $ cat /proc/sink_net_status
//! Currently Running in mode: TX
//! Total transmited packet count: 39 (4894 bytes)
//! Total received packet count: 0 (0 bytes)
//!
//! $ echo "0 0" > /proc/sink_net_status
//! ```

use core::cmp::min;
use core::fmt::{self, Write};

use alloc::sync::Arc;

use super::net_device::NetDeviceStats;
use super::sink_net::SinkNet;
use crate::config::{PROCFS_STATUS_SIZE, SinkVariant};
use crate::fs::proc::{ProcOps, generic_file_llseek};
use crate::util::{UserBuffer, UserSlice, scan_two_counts};
use crate::vfs::{FsError, SeekWhence};
use crate::{pr_err, pr_info};

const MODE_LINE: &str = "Currently Running in mode: TX\n";
const TX_LINE: &str = "Total transmited packet count:  ( bytes)\n";
const RX_LINE: &str = "Total received packet count:  ( bytes)";
/// `u64::MAX` 的十进制位数
const COUNTER_DIGITS: usize = 20;

/// 最长报告（四个计数都是 20 位）加结尾 NUL
const WORST_CASE_REPORT_LEN: usize =
    MODE_LINE.len() + TX_LINE.len() + RX_LINE.len() + 4 * COUNTER_DIGITS + 1;

const _: () = assert!(WORST_CASE_REPORT_LEN <= PROCFS_STATUS_SIZE);

/// 固定容量的报告缓冲区
struct StatusReport {
    buf: [u8; PROCFS_STATUS_SIZE],
    len: usize,
}

impl StatusReport {
    fn new() -> Self {
        Self {
            buf: [0; PROCFS_STATUS_SIZE],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 追加 C 字符串的结尾 NUL，它计入报告长度
    fn terminate(&mut self) {
        if self.len < self.buf.len() {
            self.buf[self.len] = 0;
            self.len += 1;
        }
    }
}

impl Write for StatusReport {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// 状态文件的 `proc_ops`
pub struct SinkStatusOps {
    dev: Arc<SinkNet>,
    locked_reads: bool,
}

impl SinkStatusOps {
    /// `locked_reads` 为真时读取持锁
    pub fn new(dev: Arc<SinkNet>, locked_reads: bool) -> Self {
        Self { dev, locked_reads }
    }

    fn snapshot(&self) -> NetDeviceStats {
        if self.locked_reads {
            self.dev.status().snapshot_locked()
        } else {
            self.dev.status().snapshot()
        }
    }

    fn render(&self, stats: &NetDeviceStats) -> StatusReport {
        let mut report = StatusReport::new();

        // 容量由 WORST_CASE_REPORT_LEN 在编译期保证
        let _ = match self.dev.variant() {
            SinkVariant::ModeSwitch => write!(
                report,
                "Currently Running in mode: {}\n\
                 Total transmited packet count: {} ({} bytes)\n\
                 Total received packet count: {} ({} bytes)",
                self.dev.mode().as_str(),
                stats.tx_packets,
                stats.tx_bytes,
                stats.rx_packets,
                stats.rx_bytes
            ),
            SinkVariant::TxOnly => writeln!(
                report,
                "Total transmited packet count: {} ({} bytes)",
                stats.tx_packets, stats.tx_bytes
            ),
        };
        report.terminate();
        report
    }
}

impl ProcOps for SinkStatusOps {
    fn proc_read(&self, buf: &mut UserBuffer<'_>, offset: &mut i64) -> Result<usize, FsError> {
        if *offset > 0 {
            return Ok(0);
        }

        let report = self.render(&self.snapshot());
        let len = min(report.len, buf.len());

        let not_copied = buf.copy_to_user(&report.as_bytes()[..len]);
        if not_copied != 0 {
            pr_err!(
                "Failed to copy buffer from kernel to user space. Total copied bytes: {}",
                len - not_copied
            );
            return Ok(0);
        }

        *offset = len as i64;
        Ok(len)
    }

    fn proc_write(&self, buf: &UserSlice<'_>, offset: &mut i64) -> Result<usize, FsError> {
        let length = buf.len();
        if length > PROCFS_STATUS_SIZE {
            pr_err!(
                "Input of {} bytes exceeds the {} byte status buffer.",
                length,
                PROCFS_STATUS_SIZE
            );
            return Err(FsError::InputTooLarge);
        }

        let mut msg = [0u8; PROCFS_STATUS_SIZE];
        let not_copied = buf.copy_from_user(&mut msg[..length]);
        if not_copied != 0 {
            pr_err!(
                "Failed to copy buffer from user to kernel space. Total copied bytes: {}",
                length - not_copied
            );
            return Err(FsError::Fault);
        }

        let Some((packets, bytes)) = scan_two_counts(&msg[..length]) else {
            pr_err!("Failed to extract packet count and bytes from buffer.");
            return Err(FsError::Fault);
        };

        pr_info!(
            "Updating tx packet status. packets: {}, bytes: {}",
            packets as i64,
            bytes as i64
        );
        self.dev
            .status()
            .overwrite(self.dev.mode().counter_pair(), packets, bytes);

        *offset = length as i64;
        Ok(length)
    }

    fn proc_lseek(&self, pos: i64, offset: i64, whence: u32) -> Result<i64, FsError> {
        match SeekWhence::from_raw(whence) {
            Some(_) => generic_file_llseek(pos, offset, whence, 0),
            None => Err(FsError::InvalidArgument),
        }
    }
}

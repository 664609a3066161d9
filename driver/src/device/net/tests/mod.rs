use super::*;
use crate::config::SinkVariant;
use crate::util::UserBuffer;
use alloc::string::String;
use alloc::sync::Arc;

// 测试辅助函数

/// 分配一个未注册的 sink 设备
pub fn create_test_sink(variant: SinkVariant) -> Arc<SinkNet> {
    alloc_netdev("sink%d", |core| SinkNet::new(core, variant)).unwrap()
}

/// 注册并打开一个 sink 设备
pub fn create_registered_sink(variant: SinkVariant) -> (Arc<NetDeviceRegistry>, Arc<SinkNet>) {
    let registry = Arc::new(NetDeviceRegistry::new());
    let dev = create_test_sink(variant);
    registry.register_netdevice(dev.clone()).unwrap();
    registry.dev_open(dev.core().name()).unwrap();
    (registry, dev)
}

/// 指定长度的数据帧
pub fn frame_of_len(len: usize) -> SkBuff {
    SkBuff::new(alloc::vec![0u8; len])
}

/// 以 256 字节缓冲区读一次状态文件，返回去掉结尾 NUL 的文本与原始长度
pub fn read_report(ops: &SinkStatusOps, offset: &mut i64) -> (String, usize) {
    let mut mem = [0u8; 256];
    let n = ops.proc_read(&mut UserBuffer::new(&mut mem), offset).unwrap();
    let text = core::str::from_utf8(&mem[..n])
        .unwrap()
        .trim_end_matches('\0');
    (String::from(text), n)
}

use crate::fs::proc::ProcOps;

pub mod sink_xmit;

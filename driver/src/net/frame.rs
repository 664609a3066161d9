//! 探测帧
//!
//! 以太网 II 头部（ethertype IPv4）加 4 字节负载 `de ad be ef`，共 18 字节。

use alloc::{vec, vec::Vec};

use smoltcp::wire::{EthernetAddress, EthernetFrame, EthernetProtocol};

use crate::config::ETH_ALEN;

/// 探测帧负载
pub const PROBE_PAYLOAD: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];

/// 构造一个从 `src` 发往 `dst` 的探测帧
pub fn build_probe_frame(src: [u8; ETH_ALEN], dst: [u8; ETH_ALEN]) -> Vec<u8> {
    let mut buf = vec![0u8; EthernetFrame::<&[u8]>::buffer_len(PROBE_PAYLOAD.len())];

    let mut frame = EthernetFrame::new_unchecked(&mut buf[..]);
    frame.set_src_addr(EthernetAddress(src));
    frame.set_dst_addr(EthernetAddress(dst));
    frame.set_ethertype(EthernetProtocol::Ipv4);
    frame.payload_mut().copy_from_slice(&PROBE_PAYLOAD);

    buf
}

//! 发送路径测试

use super::*;
use crate::{kassert, test_case};

test_case!(test_xmit_counts_tx_by_default, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);

    for len in [100, 200, 50] {
        kassert!(dev.start_xmit(frame_of_len(len)) == NetdevTx::Ok);
    }

    let stats = dev.stats();
    kassert!(stats.tx_packets == 3);
    kassert!(stats.tx_bytes == 350);
    kassert!(stats.rx_packets == 0 && stats.rx_bytes == 0);
});

test_case!(test_xmit_zero_length_frame, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);
    kassert!(dev.start_xmit(frame_of_len(0)) == NetdevTx::Ok);

    let stats = dev.stats();
    kassert!(stats.tx_packets == 1 && stats.tx_bytes == 0);
});

test_case!(test_xmit_follows_mode_toggle, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);
    dev.start_xmit(frame_of_len(64));

    dev.siocdevprivate(crate::uapi::ioctl::SIOC_MODE_RX).unwrap();
    dev.start_xmit(frame_of_len(10));
    dev.start_xmit(frame_of_len(20));

    let stats = dev.stats();
    kassert!(stats.tx_packets == 1 && stats.tx_bytes == 64);
    kassert!(stats.rx_packets == 2 && stats.rx_bytes == 30);

    dev.siocdevprivate(crate::uapi::ioctl::SIOC_MODE_TX).unwrap();
    dev.start_xmit(frame_of_len(1));
    let stats = dev.stats();
    kassert!(stats.tx_packets == 2 && stats.tx_bytes == 65);
    kassert!(stats.rx_packets == 2);
});

test_case!(test_xmit_tx_only_variant, {
    let dev = create_test_sink(SinkVariant::TxOnly);
    dev.start_xmit(frame_of_len(42));

    kassert!(dev.mode() == SinkMode::Tx);
    let stats = dev.stats();
    kassert!(stats.tx_packets == 1 && stats.tx_bytes == 42);
    kassert!(stats.rx_packets == 0);
});

test_case!(test_open_stop_toggle_queue, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);
    kassert!(dev.core().netif_queue_stopped());

    dev.open().unwrap();
    kassert!(!dev.core().netif_queue_stopped());

    dev.stop().unwrap();
    kassert!(dev.core().netif_queue_stopped());
});

test_case!(test_ether_setup_defaults, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);
    kassert!(dev.core().mtu() == 1500);
    kassert!(dev.core().mac_address() == [0; 6]);
    kassert!(dev.core().flags().contains(NetDeviceFlags::IFF_BROADCAST));
    kassert!(!dev.core().is_up());
});

test_case!(test_alloc_netdev_rejects_long_template, {
    let result = alloc_netdev("a_very_long_sink%d", |core| {
        SinkNet::new(core, SinkVariant::ModeSwitch)
    });
    kassert!(matches!(result, Err(NetDeviceError::AllocationFailed)));
    kassert!(NetDeviceError::AllocationFailed.to_errno() == -12);
});

test_case!(test_independent_instances, {
    let a = create_test_sink(SinkVariant::ModeSwitch);
    let b = create_test_sink(SinkVariant::ModeSwitch);

    a.siocdevprivate(crate::uapi::ioctl::SIOC_MODE_RX).unwrap();
    a.start_xmit(frame_of_len(5));
    b.start_xmit(frame_of_len(7));

    kassert!(a.mode() == SinkMode::Rx && b.mode() == SinkMode::Tx);
    kassert!(a.stats().rx_bytes == 5 && a.stats().tx_bytes == 0);
    kassert!(b.stats().tx_bytes == 7 && b.stats().rx_bytes == 0);
});

test_case!(test_concurrent_xmit_from_many_cpus, {
    let dev = create_test_sink(SinkVariant::ModeSwitch);
    let mut handles = alloc::vec::Vec::new();

    for _ in 0..4 {
        let dev = dev.clone();
        handles.push(std::thread::spawn(move || {
            for _ in 0..500 {
                dev.start_xmit(frame_of_len(3));
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let stats = dev.status().snapshot_locked();
    kassert!(stats.tx_packets == 2000);
    kassert!(stats.tx_bytes == 6000);
});

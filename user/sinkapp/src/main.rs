//! sink 设备的交互式测试程序
//!
//! 启动内核模型，加载 sink 模块并把 `sink0` 设为 up，然后提供菜单：
//! 查看/清零状态、切换 TX/RX 模式、发送探测帧。
//!
//! `sinkapp procfs` 只运行一次 procfs 冒烟测试。加上 `--dmesg` 时，
//! 退出前打印驱动留在日志缓冲区里的消息。

use std::io::{self, BufRead, Write};

use sink_net::config::{PROCFS_STATUS_ENTRY, PROCFS_STATUS_SIZE};
use sink_net::net::{PacketSocket, build_probe_frame, dev_ioctl};
use sink_net::uapi::ioctl::{IfReq, SIOC_MODE_RX, SIOC_MODE_TX, SIOCGIFHWADDR, SIOCGIFINDEX};
use sink_net::util::{UserBuffer, UserSlice};
use sink_net::vfs::{File, OpenFlags};
use sink_net::{Kernel, SinkNetConfig, SinkNetModule};

const DEFAULT_IF: &str = "sink0";
const DEST_MAC: [u8; 6] = [0; 6];

fn main() {
    let kernel = Kernel::new();
    let module = match SinkNetModule::init(&kernel, SinkNetConfig::default()) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("insmod sink_net failed: {}", err.to_errno());
            std::process::exit(1);
        }
    };
    if let Err(err) = kernel.netdev().dev_open(module.ifname()) {
        eprintln!("ip link set {} up failed: {}", module.ifname(), err.to_errno());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let procfs_only = args.iter().any(|a| a == "procfs");
    let dmesg = args.iter().any(|a| a == "--dmesg");
    if procfs_only {
        test_procfs(&kernel);
    } else {
        menu(&kernel);
    }

    module.exit(&kernel);

    if dmesg {
        for entry in sink_net::log::drain() {
            println!("{}", entry);
        }
        let lost = sink_net::log::dropped();
        if lost > 0 {
            println!("({} older messages dropped)", lost);
        }
    }
}

/// 读一次状态文件并打印（`puts`）
fn print_status(file: &dyn File) {
    let mut buff = [0u8; PROCFS_STATUS_SIZE];
    let n = file.read(&mut UserBuffer::new(&mut buff)).unwrap_or(0);
    let text = String::from_utf8_lossy(&buff[..n]);
    println!("{}", text.trim_end_matches('\0'));
}

/// 0: 读取状态，1: 清零状态
fn xfer_status(kernel: &Kernel, reset: bool) {
    let file = match kernel.procfs().open(PROCFS_STATUS_ENTRY, OpenFlags::O_RDWR) {
        Ok(f) => f,
        Err(_) => {
            println!("Failed to open procfs file.");
            return;
        }
    };

    // Make sure to reset the seek pointer
    let _ = file.lseek(0, 0);

    if reset {
        let _ = file.write(&UserSlice::new(b"0 0"));
    } else {
        print_status(&*file);
    }
}

fn set_mode(kernel: &Kernel, if_idx: &mut IfReq, mode: u32) {
    let ret = dev_ioctl(kernel.netdev(), mode, if_idx);
    if ret < 0 {
        println!("ioctl error {}", ret);
    }
}

fn send_raw_packet(sock: &PacketSocket, kernel: &Kernel) {
    let mut if_mac = IfReq::new(DEFAULT_IF);
    if dev_ioctl(kernel.netdev(), SIOCGIFHWADDR, &mut if_mac) < 0 {
        println!("SIOCGIFHWADDR failed");
    }

    let frame = build_probe_frame(if_mac.ifr_hwaddr, DEST_MAC);
    if sock.sendto(&frame).is_err() {
        println!("Send failed");
    }
}

fn get_int_input(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<i64> {
    let line = lines.next()?.ok()?;
    Some(line.trim().parse().unwrap_or(0))
}

fn menu(kernel: &Kernel) {
    let mut if_idx = IfReq::new(DEFAULT_IF);
    if dev_ioctl(kernel.netdev(), SIOCGIFINDEX, &mut if_idx) < 0 {
        println!("SIOCGIFINDEX failed");
    }

    let mut sock = PacketSocket::new(kernel.netdev().clone());
    if sock.bind(if_idx.ifr_ifindex as u32).is_err() {
        println!("bind failed");
    }

    println!("Userspace test application to interact with sink_net kernel module.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n\n\n[MENU] =================");
        println!("1. Print transfer status.");
        println!("2. Reset transfer status.");
        println!("3. Change the mode to TX.");
        println!("4. Change the mode to RX.");
        println!("5. Send raw packets.");
        println!("========================");
        print!("Enter choice:");
        let _ = io::stdout().flush();

        // EOF 时退出
        let Some(choice) = get_int_input(&mut lines) else {
            break;
        };

        match choice {
            1 => xfer_status(kernel, false),
            2 => {
                println!("Reseting status counter...");
                xfer_status(kernel, true);
                xfer_status(kernel, false);
            }
            3 => {
                println!("Setting TX mode...");
                set_mode(kernel, &mut if_idx, SIOC_MODE_TX);
            }
            4 => {
                println!("Setting RX mode...");
                set_mode(kernel, &mut if_idx, SIOC_MODE_RX);
            }
            5 => {
                print!("Enter number of packets to be send (1-100):");
                let _ = io::stdout().flush();
                let Some(num_packets) = get_int_input(&mut lines) else {
                    break;
                };
                println!("input: {}", num_packets);
                if !(1..=100).contains(&num_packets) {
                    println!("Please enter supported value.");
                } else {
                    for _ in 0..num_packets {
                        send_raw_packet(&sock, kernel);
                    }
                }
            }
            _ => println!("Enter Valid choice."),
        }
    }
}

fn test_procfs(kernel: &Kernel) {
    let file = match kernel.procfs().open(PROCFS_STATUS_ENTRY, OpenFlags::O_RDWR) {
        Ok(f) => f,
        Err(_) => {
            println!("Failed to open procfs file.");
            std::process::exit(1);
        }
    };

    println!("Initial status...");
    print_status(&*file);

    println!("Reseting status to 0...");
    let _ = file.lseek(0, 0);
    let _ = file.write(&UserSlice::new(b"0 0"));

    println!("After reset...");
    let _ = file.lseek(0, 0);
    print_status(&*file);
}

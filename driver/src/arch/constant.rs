//! 体系结构常量

/// 状态字中的本地中断使能位（对应 sstatus.SIE）
pub const SSTATUS_SIE: usize = 1 << 1;

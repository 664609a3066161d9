//! 体系结构相关接口
//!
//! 驱动只依赖“本地中断开关”和“单调时钟”两项能力，这里以软件方式提供。
pub mod constant;
pub mod intr;
pub mod timer;

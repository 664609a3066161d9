//! 测试辅助工具

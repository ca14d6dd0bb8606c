//! 工具：文件读写与剪贴板

pub mod clipboard;
pub mod fs;

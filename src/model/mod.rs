//! 数据模型：路径、叶子选择、收集、回写与文档状态

pub mod collector;
pub mod data_core;
pub mod path;
pub mod rewriter;
pub mod selector;

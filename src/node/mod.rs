//! 节点层：面向宿主的两个翻译节点
//!
//! - [`text::TextTranslateNode`]：单条文本翻译，错误以消息字符串返回
//! - [`json_file::JsonTranslateNode`]：JSON 文件翻译，返回输出路径或失败哨兵 `None`

pub mod json_file;
pub mod text;

pub use json_file::{JsonTranslateNode, JsonTranslateRequest};
pub use text::TextTranslateNode;

// === 常量定义（消除魔法值） ===
pub const TEXT_ERROR_PREFIX: &str = "翻译出错: ";
pub const DEFAULT_TEXT_SOURCE: &str = crate::translate::AUTO_LANG;
pub const DEFAULT_TEXT_TARGET: &str = "en";

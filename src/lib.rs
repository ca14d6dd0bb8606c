//! JSON翻译工具库
//!
//! 遍历任意 JSON 文档，按叶子选择策略收集待翻译字符串，有界并发地调用翻译后端，
//! 再按原路径回写并输出新的 JSON 文件；另提供单条文本翻译节点。

pub mod config;
pub mod model;
pub mod node;
pub mod translate;
pub mod utils;

// 重新导出主要类型
pub use config::{ReadFailurePolicy, SelectorPolicy, TranslateConfig};
pub use model::collector::{collect, TranslationTask};
pub use model::data_core::{process_json, JsonDocument, TranslateError};
pub use model::path::{Path, Step};
pub use model::rewriter::rewrite;
pub use model::selector::{KeySelector, LeafSelector, Script, ScriptSelector};
pub use node::{JsonTranslateNode, JsonTranslateRequest, TextTranslateNode};
pub use translate::{BackendError, Dispatcher, GoogleTranslator, LanguagePair, Translator};

//! 叶子选择器：判定 JSON 树中哪些字符串值需要翻译
//!
//! 两种策略互斥，由配置决定：按父级键名（默认 `title`），或按内容中的目标文字区段（默认中日韩统一汉字）。

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 默认的哨兵键名
pub const DEFAULT_TITLE_KEY: &str = "title";

pub trait LeafSelector: Send + Sync {
    /// `key` 为父级对象中的键名；数组元素没有键名，传 `None`
    fn is_translatable(&self, key: Option<&str>, value: &Value) -> bool;

    /// 用于日志的简短描述
    fn describe(&self) -> String;
}

/// 按键名选择：父级键名等于哨兵键且值为非空字符串
#[derive(Debug, Clone)]
pub struct KeySelector {
    key: String,
}

impl KeySelector {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for KeySelector {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_KEY)
    }
}

impl LeafSelector for KeySelector {
    fn is_translatable(&self, key: Option<&str>, value: &Value) -> bool {
        match (key, value) {
            (Some(k), Value::String(s)) => k == self.key && !s.is_empty(),
            _ => false,
        }
    }

    fn describe(&self) -> String {
        format!("key={}", self.key)
    }
}

/// 可检测的文字区段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 中日韩统一汉字（含扩展A区与兼容汉字）
    #[default]
    Cjk,
    /// 平假名与片假名
    Kana,
    Hangul,
    Cyrillic,
}

impl Script {
    pub fn ranges(self) -> &'static [RangeInclusive<char>] {
        match self {
            // 基本区块 U+4E00-U+9FFF，扩展A区 U+3400-U+4DBF，兼容汉字 U+F900-U+FAFF
            Script::Cjk => &['\u{4E00}'..='\u{9FFF}', '\u{3400}'..='\u{4DBF}', '\u{F900}'..='\u{FAFF}'],
            Script::Kana => &['\u{3040}'..='\u{309F}', '\u{30A0}'..='\u{30FF}'],
            Script::Hangul => &['\u{AC00}'..='\u{D7AF}', '\u{1100}'..='\u{11FF}'],
            Script::Cyrillic => &['\u{0400}'..='\u{04FF}'],
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.ranges().iter().any(|r| r.contains(&c))
    }

    pub fn name(self) -> &'static str {
        match self {
            Script::Cjk => "cjk",
            Script::Kana => "kana",
            Script::Hangul => "hangul",
            Script::Cyrillic => "cyrillic",
        }
    }
}

/// 按内容选择：字符串中至少含有一个目标区段字符
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSelector {
    script: Script,
}

impl ScriptSelector {
    pub fn new(script: Script) -> Self {
        Self { script }
    }
}

impl LeafSelector for ScriptSelector {
    fn is_translatable(&self, _key: Option<&str>, value: &Value) -> bool {
        match value {
            Value::String(s) => s.chars().any(|c| self.script.contains(c)),
            _ => false,
        }
    }

    fn describe(&self) -> String {
        format!("script={}", self.script.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_selector_matches_only_title_strings() {
        let sel = KeySelector::default();
        assert!(sel.is_translatable(Some("title"), &json!("Hello")));
        assert!(!sel.is_translatable(Some("name"), &json!("Hello")));
        assert!(!sel.is_translatable(None, &json!("Hello")));
    }

    #[test]
    fn test_key_selector_skips_non_strings_and_empty() {
        let sel = KeySelector::default();
        assert!(!sel.is_translatable(Some("title"), &json!("")));
        assert!(!sel.is_translatable(Some("title"), &json!(42)));
        assert!(!sel.is_translatable(Some("title"), &json!(true)));
        assert!(!sel.is_translatable(Some("title"), &json!(null)));
        assert!(!sel.is_translatable(Some("title"), &json!({"nested": "x"})));
        assert!(!sel.is_translatable(Some("title"), &json!(["x"])));
    }

    #[test]
    fn test_key_selector_custom_key() {
        let sel = KeySelector::new("label");
        assert!(sel.is_translatable(Some("label"), &json!("确定")));
        assert!(!sel.is_translatable(Some("title"), &json!("确定")));
        assert_eq!(sel.describe(), "key=label");
    }

    #[test]
    fn test_script_selector_cjk() {
        let sel = ScriptSelector::default();
        assert!(sel.is_translatable(None, &json!("世界")));
        assert!(sel.is_translatable(Some("any"), &json!("Hello 世界")));
        // 扩展A区与兼容汉字
        assert!(sel.is_translatable(None, &json!("\u{3400}")));
        assert!(sel.is_translatable(None, &json!("\u{F900}")));
        assert!(!sel.is_translatable(None, &json!("Hello")));
        assert!(!sel.is_translatable(None, &json!("")));
        assert!(!sel.is_translatable(None, &json!(12)));
    }

    #[test]
    fn test_script_selector_other_scripts() {
        assert!(ScriptSelector::new(Script::Kana).is_translatable(None, &json!("カタカナ")));
        assert!(!ScriptSelector::new(Script::Kana).is_translatable(None, &json!("漢字")));
        assert!(ScriptSelector::new(Script::Hangul).is_translatable(None, &json!("한국어")));
        assert!(ScriptSelector::new(Script::Cyrillic).is_translatable(None, &json!("Привет")));
        assert!(!ScriptSelector::new(Script::Cyrillic).is_translatable(None, &json!("Hello")));
    }

    #[test]
    fn test_script_deserializes_lowercase() {
        let s: Script = serde_json::from_str("\"hangul\"").unwrap();
        assert_eq!(s, Script::Hangul);
        assert_eq!(ScriptSelector::new(s).describe(), "script=hangul");
    }
}

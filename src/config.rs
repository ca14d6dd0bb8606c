//! 运行配置：并发、超时、叶子选择策略、后端地址与读取失败的报告方式
//!
//! 可从 JSON 文件加载，缺省字段使用默认值；命令行参数在此基础上覆盖。

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::data_core::TranslateError;
use crate::model::selector::{KeySelector, LeafSelector, Script, ScriptSelector, DEFAULT_TITLE_KEY};
use crate::translate::dispatcher::{DEFAULT_CALL_TIMEOUT, DEFAULT_CONCURRENCY};
use crate::translate::google::DEFAULT_ENDPOINT;

/// 叶子选择策略（每次运行只能二选一）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum SelectorPolicy {
    /// 父级键名等于 `key` 的字符串
    Key {
        #[serde(default = "default_title_key")]
        key: String,
    },
    /// 含有目标文字区段字符的字符串
    Script {
        #[serde(default)]
        script: Script,
    },
}

fn default_title_key() -> String {
    DEFAULT_TITLE_KEY.to_string()
}

impl Default for SelectorPolicy {
    fn default() -> Self {
        SelectorPolicy::Key {
            key: default_title_key(),
        }
    }
}

impl SelectorPolicy {
    pub fn build(&self) -> Box<dyn LeafSelector> {
        match self {
            SelectorPolicy::Key { key } => Box::new(KeySelector::new(key.clone())),
            SelectorPolicy::Script { script } => Box::new(ScriptSelector::new(*script)),
        }
    }
}

/// 输入文件读取/解析失败时的报告方式；两种方式下节点都返回失败哨兵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadFailurePolicy {
    #[default]
    Report,
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub concurrency: usize,
    pub call_timeout_secs: u64,
    pub selector: SelectorPolicy,
    pub endpoint: String,
    pub on_read_failure: ReadFailurePolicy,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            call_timeout_secs: DEFAULT_CALL_TIMEOUT.as_secs(),
            selector: SelectorPolicy::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            on_read_failure: ReadFailurePolicy::default(),
        }
    }
}

impl TranslateConfig {
    /// 从 JSON 文件加载并校验
    pub fn load(path: &Path) -> Result<Self, TranslateError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| TranslateError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.concurrency == 0 {
            return Err(TranslateError::Config("concurrency 必须大于 0".into()));
        }
        if self.call_timeout_secs == 0 {
            return Err(TranslateError::Config("call_timeout_secs 必须大于 0".into()));
        }
        if let SelectorPolicy::Key { key } = &self.selector {
            if key.is_empty() {
                return Err(TranslateError::Config("selector.key 不能为空".into()));
            }
        }
        Ok(())
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TranslateConfig::default();
        assert_eq!(config.concurrency, 25);
        assert_eq!(config.call_timeout(), Duration::from_secs(30));
        assert_eq!(config.selector, SelectorPolicy::Key { key: "title".into() });
        assert_eq!(config.on_read_failure, ReadFailurePolicy::Report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("config.json");
        std::fs::write(&p, r#"{"concurrency": 8, "selector": {"policy": "script"}}"#).unwrap();
        let config = TranslateConfig::load(&p).unwrap();
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.selector, SelectorPolicy::Script { script: Script::Cjk });
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_selector_policy_builds_strategy() {
        let key: SelectorPolicy = serde_json::from_value(json!({"policy": "key", "key": "label"})).unwrap();
        let sel = key.build();
        assert!(sel.is_translatable(Some("label"), &json!("x")));
        assert!(!sel.is_translatable(Some("title"), &json!("x")));

        let script: SelectorPolicy =
            serde_json::from_value(json!({"policy": "script", "script": "cyrillic"})).unwrap();
        assert_eq!(script.build().describe(), "script=cyrillic");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("config.json");

        std::fs::write(&p, r#"{"concurrency": 0}"#).unwrap();
        assert!(matches!(TranslateConfig::load(&p), Err(TranslateError::Config(_))));

        std::fs::write(&p, r#"{"selector": {"policy": "regex"}}"#).unwrap();
        assert!(matches!(TranslateConfig::load(&p), Err(TranslateError::Config(_))));

        std::fs::write(&p, r#"{"on_read_failure": "silent", "call_timeout_secs": 0}"#).unwrap();
        assert!(matches!(TranslateConfig::load(&p), Err(TranslateError::Config(_))));
    }
}

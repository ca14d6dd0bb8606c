//! 翻译后端边界：单条文本翻译的 trait、后端错误与语言对

pub mod dispatcher;
pub mod google;
pub mod languages;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use dispatcher::Dispatcher;
pub use google::GoogleTranslator;

/// 源语言自动检测
pub const AUTO_LANG: &str = "auto";
/// 目标语言哨兵：不翻译，原样输出
pub const NONE_LANG: &str = "none";

/// 单次调用的后端错误；批量翻译中只影响对应叶子
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("不支持的语言: {0}")]
    UnsupportedLanguage(String),
    #[error("文本过长: {chars} 个字符（上限 {max}）")]
    TextTooLong { chars: usize, max: usize },
    #[error("网络错误: {0}")]
    Network(String),
    #[error("翻译服务返回状态码 {0}")]
    Status(u16),
    #[error("无法解析翻译服务响应: {0}")]
    MalformedResponse(String),
    #[error("翻译超时（{0:?}）")]
    Timeout(Duration),
}

/// 一次运行使用的源语言与目标语言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// 目标语言为 `none` 时为直通模式
    pub fn is_pass_through(&self) -> bool {
        self.target == NONE_LANG
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, BackendError>;
}

/// 测试替身
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 原样返回
    pub struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, BackendError> {
            Ok(text.to_string())
        }
    }

    /// 返回 `[目标语言]原文`，便于断言
    pub struct TagTranslator;

    #[async_trait]
    impl Translator for TagTranslator {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String, BackendError> {
            Ok(format!("[{}]{}", target, text))
        }
    }

    /// 完成顺序与提交顺序相反：原文形如 `t{n}`，n 越小等待越久
    pub struct ReverseDelayTranslator {
        pub total: u64,
    }

    #[async_trait]
    impl Translator for ReverseDelayTranslator {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String, BackendError> {
            let n: u64 = text.trim_start_matches('t').parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis((self.total - n) * 15)).await;
            Ok(format!("[{}]{}", target, text))
        }
    }

    /// 遇到指定原文时失败，其余打标签
    pub struct FailingTranslator {
        pub fail_on: &'static str,
    }

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String, BackendError> {
            if text == self.fail_on {
                return Err(BackendError::Network("connection reset".to_string()));
            }
            Ok(format!("[{}]{}", target, text))
        }
    }

    /// 遇到指定原文时一直挂起
    pub struct HangingTranslator {
        pub hang_on: &'static str,
    }

    #[async_trait]
    impl Translator for HangingTranslator {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String, BackendError> {
            if text == self.hang_on {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            Ok(format!("[{}]{}", target, text))
        }
    }

    /// 记录同时在途的最大调用数
    #[derive(Default)]
    pub struct CountingTranslator {
        pub in_flight: AtomicUsize,
        pub peak: AtomicUsize,
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, BackendError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(text.to_uppercase())
        }
    }
}

//! 单条文本翻译节点

use std::sync::Arc;
use std::time::Duration;

use crate::translate::dispatcher::DEFAULT_CALL_TIMEOUT;
use crate::translate::{BackendError, Translator};

use super::TEXT_ERROR_PREFIX;

pub struct TextTranslateNode {
    translator: Arc<dyn Translator>,
    call_timeout: Duration,
}

impl TextTranslateNode {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// 翻译失败时返回带前缀的错误消息，而不是错误
    pub async fn translate_text(&self, text: &str, src_lang: &str, dest_lang: &str) -> String {
        match self.try_translate(text, src_lang, dest_lang).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!("文本翻译失败: {}", e);
                format!("{}{}", TEXT_ERROR_PREFIX, e)
            }
        }
    }

    async fn try_translate(&self, text: &str, src_lang: &str, dest_lang: &str) -> Result<String, BackendError> {
        tokio::time::timeout(self.call_timeout, self.translator.translate(text, src_lang, dest_lang))
            .await
            .map_err(|_| BackendError::Timeout(self.call_timeout))?
    }
}

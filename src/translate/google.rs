//! Google 翻译后端（免密钥 gtx 接口）

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::languages::resolve_language;
use super::{BackendError, Translator, AUTO_LANG};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
/// 单次请求允许的最大字符数
pub const MAX_CHARS: usize = 5000;

pub struct GoogleTranslator {
    http: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder()
            .user_agent(concat!("json_fanyi/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch(&self, text: &str, source: &str, target: &str) -> Result<String, BackendError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        parse_gtx_response(&body)
    }
}

/// 规范化源语言：`auto` 原样保留，其余解析为代码
fn normalize_source(source: &str) -> Result<&'static str, BackendError> {
    if source.eq_ignore_ascii_case(AUTO_LANG) {
        return Ok(AUTO_LANG);
    }
    resolve_language(source).ok_or_else(|| BackendError::UnsupportedLanguage(source.to_string()))
}

fn normalize_target(target: &str) -> Result<&'static str, BackendError> {
    resolve_language(target).ok_or_else(|| BackendError::UnsupportedLanguage(target.to_string()))
}

/// 响应形如 `[[["译文1","原文1",...],["译文2","原文2",...]], null, "en", ...]`，拼接首个数组中的各段译文
pub fn parse_gtx_response(body: &Value) -> Result<String, BackendError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| BackendError::MalformedResponse("缺少译文段落".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(BackendError::MalformedResponse("译文为空".to_string()));
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, BackendError> {
        let source = normalize_source(source)?;
        let target = normalize_target(target)?;

        let chars = text.chars().count();
        if chars > MAX_CHARS {
            return Err(BackendError::TextTooLong { chars, max: MAX_CHARS });
        }

        let trimmed = text.trim();
        if trimmed.is_empty() || source == target {
            return Ok(text.to_string());
        }

        tracing::debug!("请求翻译 {} -> {}: {} 个字符", source, target, chars);
        self.fetch(trimmed, source, target).await
    }
}

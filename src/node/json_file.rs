//! JSON 文件翻译节点：读取 → 收集 → 并发翻译 → 回写 → 写出 `{主干}-{目标语言}.json`

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{ReadFailurePolicy, TranslateConfig};
use crate::model::data_core::{JsonDocument, TranslateError};
use crate::model::selector::LeafSelector;
use crate::translate::{Dispatcher, LanguagePair, Translator};
use crate::utils::fs::derive_output_path;

/// JSON 文件节点的输入参数
#[derive(Debug, Clone)]
pub struct JsonTranslateRequest {
    pub input_path: PathBuf,
    pub source_lang: String,
    pub target_lang: String,
    pub pretty_print: bool,
}

impl JsonTranslateRequest {
    pub fn new(input_path: impl Into<PathBuf>, source_lang: &str, target_lang: &str) -> Self {
        Self {
            input_path: input_path.into(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            pretty_print: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    fn languages(&self) -> LanguagePair {
        LanguagePair::new(self.source_lang.clone(), self.target_lang.clone())
    }
}

pub struct JsonTranslateNode {
    dispatcher: Dispatcher,
    selector: Box<dyn LeafSelector>,
    on_read_failure: ReadFailurePolicy,
}

impl JsonTranslateNode {
    pub fn new(dispatcher: Dispatcher, selector: Box<dyn LeafSelector>) -> Self {
        Self {
            dispatcher,
            selector,
            on_read_failure: ReadFailurePolicy::default(),
        }
    }

    pub fn from_config(translator: Arc<dyn Translator>, config: &TranslateConfig) -> Self {
        let dispatcher = Dispatcher::new(translator)
            .with_concurrency(config.concurrency)
            .with_call_timeout(config.call_timeout());
        Self::new(dispatcher, config.selector.build()).with_read_failure_policy(config.on_read_failure)
    }

    pub fn with_read_failure_policy(mut self, policy: ReadFailurePolicy) -> Self {
        self.on_read_failure = policy;
        self
    }

    /// 宿主入口：成功返回输出文件路径，失败返回 `None`
    pub async fn translate_json_file(
        &self,
        input_path: &Path,
        source_lang: &str,
        target_lang: &str,
        fancy_mode: bool,
    ) -> Option<PathBuf> {
        let request = JsonTranslateRequest::new(input_path, source_lang, target_lang).with_pretty_print(fancy_mode);
        match self.run(&request).await {
            Ok(output) => Some(output),
            Err(e) => {
                self.report_failure(&e);
                None
            }
        }
    }

    fn report_failure(&self, e: &TranslateError) {
        let read_failure = matches!(
            e,
            TranslateError::InputNotFound(_) | TranslateError::Decode { .. } | TranslateError::Parse { .. }
        );
        if read_failure && self.on_read_failure == ReadFailurePolicy::Silent {
            tracing::debug!("读取输入失败: {}", e);
        } else {
            tracing::error!("JSON翻译失败: {}", e);
        }
    }

    /// 使用内置分发器执行完整流程
    pub async fn run(&self, request: &JsonTranslateRequest) -> Result<PathBuf, TranslateError> {
        let dispatcher = &self.dispatcher;
        let langs = request.languages();
        self.run_with(request, move |texts| async move { dispatcher.dispatch_all(&texts, &langs).await })
            .await
    }

    /// 使用给定的翻译步骤执行完整流程；任何错误都发生在写出文件之前
    pub async fn run_with<F, Fut>(&self, request: &JsonTranslateRequest, dispatch: F) -> Result<PathBuf, TranslateError>
    where
        F: FnOnce(Vec<String>) -> Fut,
        Fut: Future<Output = Vec<String>>,
    {
        let start = Instant::now();
        let mut doc = JsonDocument::load_file(&request.input_path)?;
        tracing::info!("已加载: {}", request.input_path.display());

        if request.languages().is_pass_through() {
            tracing::info!("目标语言为 none，跳过翻译");
        } else {
            let count = doc.translate_with(self.selector.as_ref(), dispatch).await?;
            tracing::info!("已回写 {} 个叶子", count);
        }

        // 输出名总带 `-{目标语言}` 后缀，不会与输入同名
        let output = derive_output_path(&request.input_path, &request.target_lang);
        doc.save_to_file(&output, request.pretty_print)?;
        tracing::info!("JSON翻译完成: {}，总耗时: {}ms", output.display(), start.elapsed().as_millis());
        Ok(output)
    }
}

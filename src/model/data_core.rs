//! JsonDocument：单次运行持有的 JSON 树与致命错误定义

use std::future::Future;
use std::path::{Path as FsPath, PathBuf};
use std::time::Instant;

use serde_json::Value;
use thiserror::Error;

use crate::model::collector::collect;
use crate::model::rewriter::rewrite;
use crate::model::selector::LeafSelector;
use crate::utils::fs::{read_json_file, write_json_file};

/// 文件级致命错误：任何一个都会中止本次运行，且不写出文件
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("输入文件不存在: {0}")]
    InputNotFound(PathBuf),
    #[error("输入文件不是有效的UTF-8: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("JSON解析失败: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("译文数量({results})与收集到的条目数量({tasks})不一致")]
    AssociationMismatch { tasks: usize, results: usize },
    #[error("路径不可回写: {0}")]
    UnresolvablePath(String),
    #[error("输出路径与输入文件相同，拒绝覆盖: {0}")]
    OutputWouldOverwriteInput(PathBuf),
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("配置错误: {0}")]
    Config(String),
}

/// 一次运行中的文档状态
#[derive(Debug)]
pub struct JsonDocument {
    pub source_path: PathBuf,
    pub dom: Value,
}

impl JsonDocument {
    /// 读取并解析输入文件
    pub fn load_file(p: &FsPath) -> Result<Self, TranslateError> {
        let dom = read_json_file(p)?;
        Ok(Self {
            source_path: p.to_path_buf(),
            dom,
        })
    }

    /// 收集 → 翻译 → 回写，返回被回写的叶子数量
    pub async fn translate_with<F, Fut>(
        &mut self,
        selector: &dyn LeafSelector,
        dispatch: F,
    ) -> Result<usize, TranslateError>
    where
        F: FnOnce(Vec<String>) -> Fut,
        Fut: Future<Output = Vec<String>>,
    {
        process_json(&mut self.dom, selector, dispatch).await
    }

    /// 将当前DOM保存到指定路径
    pub fn save_to_file(&self, path: &FsPath, pretty: bool) -> Result<(), TranslateError> {
        if path == self.source_path {
            return Err(TranslateError::OutputWouldOverwriteInput(path.to_path_buf()));
        }
        write_json_file(path, &self.dom, pretty)?;
        tracing::info!("JSON文件已保存到: {}", path.display());
        Ok(())
    }
}

/// 对一棵树执行收集、翻译与回写
///
/// `dispatch` 接收按收集顺序排列的原文，必须按同样顺序返回译文；
/// 数量不一致时在任何修改之前返回 [`TranslateError::AssociationMismatch`]。
pub async fn process_json<F, Fut>(
    dom: &mut Value,
    selector: &dyn LeafSelector,
    dispatch: F,
) -> Result<usize, TranslateError>
where
    F: FnOnce(Vec<String>) -> Fut,
    Fut: Future<Output = Vec<String>>,
{
    let collect_start = Instant::now();
    let tasks = collect(dom, selector);
    tracing::info!(
        "收集到 {} 个待翻译叶子 ({})，耗时: {}ms",
        tasks.len(),
        selector.describe(),
        collect_start.elapsed().as_millis()
    );

    if tasks.is_empty() {
        return Ok(0);
    }

    let texts: Vec<String> = tasks.iter().map(|t| t.text.clone()).collect();
    let dispatch_start = Instant::now();
    let translated = dispatch(texts).await;
    tracing::info!(
        "翻译完成: {} 条，耗时: {}ms",
        translated.len(),
        dispatch_start.elapsed().as_millis()
    );

    rewrite(dom, &tasks, translated)
}

//! 剪贴板：`text --copy` 时把译文交给桌面会话

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("无法打开系统剪贴板: {0}")]
    Unavailable(String),
    #[error("写入剪贴板失败: {0}")]
    Write(String),
    #[error("读取剪贴板失败: {0}")]
    Read(String),
}

fn open_clipboard() -> Result<ClipboardContext, ClipboardError> {
    ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// 将译文复制到系统剪贴板
pub fn copy_to_clipboard(translated: &str) -> Result<(), ClipboardError> {
    let mut clipboard = open_clipboard()?;
    clipboard
        .set_contents(translated.to_owned())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;
    tracing::debug!("已复制 {} 个字符到剪贴板", translated.chars().count());
    Ok(())
}

#[cfg(test)]
fn read_clipboard() -> Result<String, ClipboardError> {
    open_clipboard()?
        .get_contents()
        .map_err(|e| ClipboardError::Read(e.to_string()))
}

//! IO helper: safe file read/write for JSON

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::model::data_core::TranslateError;

/// 与原有输出保持一致的缩进宽度
const PRETTY_INDENT: &[u8] = b"    ";

/// 从文件读取JSON数据，区分不存在、编码错误与语法错误
pub fn read_json_file(p: &Path) -> Result<Value, TranslateError> {
    if !p.exists() {
        return Err(TranslateError::InputNotFound(p.to_path_buf()));
    }
    let bytes = std::fs::read(p)?;
    let text = String::from_utf8(bytes).map_err(|source| TranslateError::Decode {
        path: p.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TranslateError::Parse {
        path: p.to_path_buf(),
        source,
    })
}

/// 输出文件名：`{输入文件名主干}-{目标语言}.json`，与输入文件同目录
pub fn derive_output_path(input: &Path, target_lang: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}-{}.json", stem, target_lang);
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// 将JSON数据保存到文件，按需创建目录；非ASCII字符原样输出
pub fn write_json_file(p: &Path, value: &Value, pretty: bool) -> Result<(), TranslateError> {
    if let Some(dir) = p.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut writer = BufWriter::new(File::create(p)?);
    if pretty {
        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(PRETTY_INDENT));
        value.serialize(&mut ser).map_err(TranslateError::Serialize)?;
    } else {
        serde_json::to_writer(&mut writer, value).map_err(TranslateError::Serialize)?;
    }
    writer.flush()?;
    Ok(())
}

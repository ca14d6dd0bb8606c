//! 回写：按收集顺序把译文写回原树（原地修改）

use serde_json::Value;

use crate::model::collector::TranslationTask;
use crate::model::data_core::TranslateError;

/// `results` 必须与 `tasks` 一一对应且顺序一致；数量不符时不做任何修改
pub fn rewrite(
    dom: &mut Value,
    tasks: &[TranslationTask],
    results: Vec<String>,
) -> Result<usize, TranslateError> {
    if tasks.len() != results.len() {
        return Err(TranslateError::AssociationMismatch {
            tasks: tasks.len(),
            results: results.len(),
        });
    }

    let mut written = 0;
    for (task, translated) in tasks.iter().zip(results) {
        let slot = task
            .path
            .resolve_mut(dom)
            .ok_or_else(|| TranslateError::UnresolvablePath(task.path.to_string()))?;
        *slot = Value::String(translated);
        written += 1;
    }
    Ok(written)
}

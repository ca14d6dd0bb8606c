//! 路径收集：深度优先先序遍历，按遍历顺序记录每个可翻译叶子的路径与原文

use serde_json::Value;

use crate::model::path::{Path, Step};
use crate::model::selector::LeafSelector;

/// 一个待翻译单元：叶子路径与原文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTask {
    pub path: Path,
    pub text: String,
}

/// 收集全部可翻译叶子，输出顺序即遍历顺序（回写时依赖此顺序）
pub fn collect(root: &Value, selector: &dyn LeafSelector) -> Vec<TranslationTask> {
    let mut out = Vec::new();
    let mut path = Path::root();
    walk(root, &mut path, selector, &mut out);
    out
}

fn record(out: &mut Vec<TranslationTask>, path: &Path, v: &Value) {
    if let Value::String(s) = v {
        out.push(TranslationTask {
            path: path.clone(),
            text: s.clone(),
        });
    }
}

fn walk(v: &Value, path: &mut Path, selector: &dyn LeafSelector, out: &mut Vec<TranslationTask>) {
    match v {
        Value::Object(map) => {
            for (k, child) in map {
                path.push(Step::Key(k.clone()));
                if selector.is_translatable(Some(k), child) {
                    record(out, path, child);
                }
                // 无论是否命中都继续下探
                walk(child, path, selector, out);
                path.pop();
            }
        }
        Value::Array(arr) => {
            for (idx, child) in arr.iter().enumerate() {
                path.push(Step::Index(idx));
                if selector.is_translatable(None, child) {
                    record(out, path, child);
                }
                walk(child, path, selector, out);
                path.pop();
            }
        }
        _ => {}
    }
}

//! 叶子路径：从根出发的键/索引序列，用于精确寻址与回写

use std::fmt;

use serde_json::Value;

/// 路径中的一步：对象键或数组索引
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

/// 从根节点到某个标量位置的完整路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Step>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.0.pop()
    }

    /// 返回追加一步后的新路径（原路径不变）
    pub fn child(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend(self.0.iter().cloned());
        steps.push(step);
        Self(steps)
    }

    /// 只读寻址
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0.iter().try_fold(root, |current, step| step_into(current, step))
    }

    /// 可变寻址：先沿除最后一步外的路径走到父节点，再按最后一步取槽位
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let Some((last, parents)) = self.0.split_last() else {
            return Some(root);
        };
        let mut parent = root;
        for step in parents {
            parent = step_into_mut(parent, step)?;
        }
        step_into_mut(parent, last)
    }
}

fn step_into<'a>(v: &'a Value, step: &Step) -> Option<&'a Value> {
    match (v, step) {
        (Value::Object(map), Step::Key(k)) => map.get(k),
        (Value::Array(arr), Step::Index(i)) => arr.get(*i),
        _ => None,
    }
}

fn step_into_mut<'a>(v: &'a mut Value, step: &Step) -> Option<&'a mut Value> {
    match (v, step) {
        (Value::Object(map), Step::Key(k)) => map.get_mut(k),
        (Value::Array(arr), Step::Index(i)) => arr.get_mut(*i),
        _ => None,
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// 以 RFC 9535 JSONPath 形式展示，便于日志定位
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.0 {
            match step {
                // 字段含特殊字符时使用 bracket-notation
                Step::Key(k) if !k.is_empty() && k.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
                    write!(f, ".{}", k)?
                }
                Step::Key(k) => write!(f, "['{}']", k.replace('\'', "\\'"))?,
                Step::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

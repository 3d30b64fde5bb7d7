use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_rule;

/// 单个元素的样式声明集合（属性名 → 值）
///
/// 使用 IndexMap 保持插入顺序，仅用于最终输出格式化，匹配逻辑不依赖顺序
pub type DeclarationSet = IndexMap<String, String>;

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "10px"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 规则集：一个工具类对应的规范化声明列表（`property:value`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet(Vec<String>);

impl RuleSet {
    /// 从已规范化的规则构造
    pub fn new(rules: Vec<String>) -> Self {
        Self(rules)
    }

    /// 从多行声明文本构造
    ///
    /// 每行一条 `property: value;`，空行与无法解析的行被丢弃
    ///
    /// ```
    /// use wzmap_core::RuleSet;
    ///
    /// let rules = RuleSet::from_blob("padding-top: 10px;\n\npadding-bottom: 10px;\n");
    /// assert_eq!(rules.len(), 2);
    /// assert!(rules.contains("padding-top:10px"));
    /// ```
    pub fn from_blob(blob: &str) -> Self {
        Self(blob.lines().filter_map(normalize_rule).collect())
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.0.iter().any(|r| r == rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 字典条目：规则集 + 类名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetEntry {
    pub class_name: String,
    pub rules: RuleSet,
}

impl RuleSetEntry {
    pub fn new(class_name: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            class_name: class_name.into(),
            rules,
        }
    }
}

/// 匹配结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// 按匹配顺序排列的工具类名
    pub classes: Vec<String>,
    /// 未被工具类覆盖的剩余声明
    pub residual: DeclarationSet,
    /// 被跳过的情况（不影响结果）
    pub diagnostics: Vec<Diagnostic>,
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

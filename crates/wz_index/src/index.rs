use std::collections::HashMap;

use wzmap_core::{DictionaryLookup, RuleSet, RuleSetEntry};

/// 工具类字典
///
/// 条目按配置顺序保存，另建类名索引用于存在性查询。构建完成后只读。
#[derive(Debug, Clone, Default)]
pub struct WzIndex {
    entries: Vec<RuleSetEntry>,
    by_class: HashMap<String, usize>,
}

impl WzIndex {
    /// 创建空字典
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 (类名, 声明文本) 序列构造
    pub fn from_blobs<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut index = Self::new();
        for (class, blob) in items {
            index.insert(class.into(), RuleSet::from_blob(blob.as_ref()));
        }
        index
    }

    /// 插入类名和对应的规则集
    ///
    /// 类名已存在时替换其规则集，保留原顺序位置
    pub fn insert(&mut self, class: String, rules: RuleSet) {
        if let Some(&pos) = self.by_class.get(&class) {
            log::debug!("duplicate class {} replaces earlier definition", class);
            self.entries[pos].rules = rules;
            return;
        }
        self.by_class.insert(class.clone(), self.entries.len());
        self.entries.push(RuleSetEntry::new(class, rules));
    }

    /// 查询类名对应的规则集
    pub fn lookup(&self, class: &str) -> Option<&RuleSet> {
        self.by_class.get(class).map(|&pos| &self.entries[pos].rules)
    }

    /// 获取所有已知的类名（配置顺序）
    pub fn classes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.class_name.as_str()).collect()
    }

    /// 声明文本无法解析出任何规则的类名
    pub fn empty_rule_sets(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.rules.is_empty())
            .map(|e| e.class_name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionaryLookup for WzIndex {
    fn contains_class(&self, class: &str) -> bool {
        self.by_class.contains_key(class)
    }

    fn entries(&self) -> &[RuleSetEntry] {
        &self.entries
    }
}

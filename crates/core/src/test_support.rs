use crate::dictionary::DictionaryLookup;
use crate::types::{DeclarationSet, RuleSet, RuleSetEntry};

/// 测试用的简单字典实现
pub struct SimpleDictionary {
    entries: Vec<RuleSetEntry>,
}

impl SimpleDictionary {
    pub fn new(items: &[(&str, &str)]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|(class, blob)| RuleSetEntry::new(*class, RuleSet::from_blob(blob)))
                .collect(),
        }
    }
}

impl DictionaryLookup for SimpleDictionary {
    fn contains_class(&self, class: &str) -> bool {
        self.entries.iter().any(|e| e.class_name == class)
    }

    fn entries(&self) -> &[RuleSetEntry] {
        &self.entries
    }
}

pub fn style(items: &[(&str, &str)]) -> DeclarationSet {
    items
        .iter()
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect()
}

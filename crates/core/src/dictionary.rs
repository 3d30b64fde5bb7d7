use crate::types::RuleSetEntry;

/// 工具类字典的查询接口
///
/// 使用 trait 而不是具体类型，以便于测试和解耦
pub trait DictionaryLookup {
    /// 类名是否存在于字典中
    fn contains_class(&self, class: &str) -> bool;

    /// 按配置顺序排列的全部条目
    fn entries(&self) -> &[RuleSetEntry];
}

/// 所有工具类共用的命名空间前缀
pub const CLASS_NAMESPACE: &str = "wz-";

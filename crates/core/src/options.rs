use serde::{Deserialize, Serialize};

/// 剩余 CSS 的输出策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidualPolicy {
    /// 总是输出剩余声明
    #[default]
    Always,
    /// 未匹配到任何类时输出空字符串
    EmptyWhenUnmatched,
}

/// 匹配选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// 剩余 CSS 的输出策略（默认 Always）
    pub residual_policy: ResidualPolicy,
    /// 简写属性只被部分匹配时，是否将未匹配的方向保留为子属性声明（默认 true）
    ///
    /// 关闭后整个简写属性被删除，未匹配方向的值会丢失
    pub preserve_unmatched_sides: bool,
    /// 是否跳过空规则集（默认 true）
    ///
    /// 空规则集对任何声明集合都成立，关闭后每次都会输出对应类名
    pub skip_empty_rule_sets: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            residual_policy: ResidualPolicy::Always,
            preserve_unmatched_sides: true,
            skip_empty_rule_sets: true,
        }
    }
}

impl MatchOptions {
    /// 兼容模式：丢弃未匹配的方向，不跳过空规则集
    pub fn legacy() -> Self {
        Self {
            residual_policy: ResidualPolicy::Always,
            preserve_unmatched_sides: false,
            skip_empty_rule_sets: false,
        }
    }
}

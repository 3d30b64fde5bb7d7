use serde::{Deserialize, Serialize};

use crate::options::{MatchOptions, ResidualPolicy};
use crate::types::{DeclarationSet, MatchResult};

/// 宿主可请求的输出槽
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputSlot {
    /// 匹配到的类名（空格分隔）
    ClassName,
    /// 剩余 CSS
    Css,
    /// 原始 CSS（未修改）
    Original,
    /// 空输出，用于屏蔽宿主的其它代码块
    Empty,
}

/// 类名输出：空格拼接
pub fn format_classes(classes: &[String]) -> String {
    classes.join(" ")
}

/// CSS 输出：每条声明一行 `property: value;`
///
/// 值为空的声明被跳过
pub fn format_residual(style: &DeclarationSet) -> String {
    style
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 渲染指定输出槽
pub fn render_slot(
    slot: OutputSlot,
    original: &DeclarationSet,
    result: &MatchResult,
    options: &MatchOptions,
) -> String {
    match slot {
        OutputSlot::ClassName => format_classes(&result.classes),
        OutputSlot::Css => match options.residual_policy {
            ResidualPolicy::EmptyWhenUnmatched if result.classes.is_empty() => String::new(),
            _ => format_residual(&result.residual),
        },
        OutputSlot::Original => format_residual(original),
        OutputSlot::Empty => String::new(),
    }
}

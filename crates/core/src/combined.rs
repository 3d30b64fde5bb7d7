use crate::dictionary::{DictionaryLookup, CLASS_NAMESPACE};
use crate::normalize::parse_box_magnitude;
use crate::shorthand::{BoxProperty, BoxSides, Side};

/// 组合类匹配结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedMatch {
    /// 匹配到的类名（按 tb/t/b → lr/l/r 顺序）
    pub classes: Vec<String>,
    /// 已被类名覆盖的方向
    pub covered: Vec<Side>,
}

impl CombinedMatch {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn covers(&self, side: Side) -> bool {
        self.covered.contains(&side)
    }

    fn push(&mut self, class: String, sides: &[Side]) {
        self.classes.push(class);
        self.covered.extend_from_slice(sides);
    }
}

fn class_name(property: BoxProperty, axis: &str, value: i64) -> String {
    format!(
        "{}{}{}-{}",
        CLASS_NAMESPACE,
        property.class_prefix(),
        axis,
        value
    )
}

/// 为展开后的盒模型值匹配组合工具类
///
/// 任一方向不是整数像素值时返回 None；返回 Some 时 classes 可能为空。
///
/// 匹配顺序：
/// 1. 四边相同且 `{p}tb-N`、`{p}lr-N` 都存在 → 直接返回这两个类
/// 2. 上下：相同尝试 `{p}tb-N`，否则分别尝试 `{p}t-N`、`{p}b-N`
/// 3. 左右：相同尝试 `{p}lr-N`，否则分别尝试 `{p}l-N`、`{p}r-N`
pub fn match_combined<D>(
    property: BoxProperty,
    sides: &BoxSides<String>,
    dict: &D,
) -> Option<CombinedMatch>
where
    D: DictionaryLookup + ?Sized,
{
    let values = sides.try_map(|v| parse_box_magnitude(v))?;
    let mut result = CombinedMatch::default();

    let try_class = |result: &mut CombinedMatch, axis: &str, value: i64, covers: &[Side]| {
        let class = class_name(property, axis, value);
        if dict.contains_class(&class) {
            result.push(class, covers);
        } else {
            log::debug!("combined class candidate {} not in dictionary", class);
        }
    };

    if values.top == values.right && values.right == values.bottom && values.bottom == values.left
    {
        let tb = class_name(property, "tb", values.top);
        let lr = class_name(property, "lr", values.top);
        if dict.contains_class(&tb) && dict.contains_class(&lr) {
            result.push(tb, &[Side::Top, Side::Bottom]);
            result.push(lr, &[Side::Left, Side::Right]);
            return Some(result);
        }
    }

    if values.top == values.bottom {
        try_class(&mut result, "tb", values.top, &[Side::Top, Side::Bottom]);
    } else {
        try_class(&mut result, "t", values.top, &[Side::Top]);
        try_class(&mut result, "b", values.bottom, &[Side::Bottom]);
    }

    if values.left == values.right {
        try_class(&mut result, "lr", values.left, &[Side::Left, Side::Right]);
    } else {
        try_class(&mut result, "l", values.left, &[Side::Left]);
        try_class(&mut result, "r", values.right, &[Side::Right]);
    }

    Some(result)
}

use std::collections::HashSet;

use crate::normalize::{declaration_key, parse_px};
use crate::shorthand::expand_shorthand;
use crate::types::{DeclarationSet, RuleSet};

/// 声明集合的规范化字符串集合
///
/// padding/margin 展开为子属性，其余属性原样转换为 `property:value`
fn expanded_keys(style: &DeclarationSet) -> HashSet<String> {
    let mut keys = HashSet::new();
    for (property, value) in style {
        let longhands = expand_shorthand(property, value);
        if longhands.is_empty() {
            keys.insert(declaration_key(property, value));
        } else {
            keys.extend(
                longhands
                    .iter()
                    .map(|d| declaration_key(&d.property, &d.value)),
            );
        }
    }
    keys
}

/// 声明集合是否包含规则集中的全部声明
pub fn matches(style: &DeclarationSet, rules: &RuleSet) -> bool {
    let keys = expanded_keys(style);
    rules.iter().all(|rule| keys.contains(rule))
}

/// 移除被规则集覆盖的声明
///
/// - padding/margin：仅当所有展开后的子属性都在规则集中时才移除
/// - 其余属性：`property:value` 在规则集中即移除
/// - 移除 font-size 时，若 line-height 的像素值与其相同，一并移除
pub fn remove_matched(style: &mut DeclarationSet, rules: &RuleSet) {
    let mut to_delete: Vec<String> = Vec::new();

    for (property, value) in style.iter() {
        let longhands = expand_shorthand(property, value);
        let covered = if !longhands.is_empty() {
            longhands
                .iter()
                .all(|d| rules.contains(&declaration_key(&d.property, &d.value)))
        } else {
            rules.contains(&declaration_key(property, value))
        };
        if !covered {
            continue;
        }

        to_delete.push(property.clone());

        if property == "font-size" {
            let font_size = parse_px(value);
            let line_height = style.get("line-height").and_then(|v| parse_px(v));
            if font_size.is_some() && font_size == line_height {
                to_delete.push("line-height".to_string());
            }
        }
    }

    for property in to_delete {
        style.shift_remove(&property);
    }
}

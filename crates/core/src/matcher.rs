use crate::combined::match_combined;
use crate::dictionary::{DictionaryLookup, CLASS_NAMESPACE};
use crate::normalize::{declaration_key, parse_px};
use crate::options::MatchOptions;
use crate::rules::{matches, remove_matched};
use crate::shorthand::{parse_shorthand, BoxProperty, Side};
use crate::types::{Declaration, DeclarationSet, Diagnostic, MatchResult, RuleSet};

/// 主匹配函数
///
/// 在声明集合上依次执行三轮匹配，返回匹配到的类名，并把已覆盖的声明从集合中移除：
///
/// 1. 字号：`font-size: Npx` → `wz-fs-N`（line-height 相同时一并消费）
/// 2. 盒模型：padding、margin 的组合类
/// 3. 通用：按字典顺序逐条匹配规则集
///
/// 顺序固定，通用规则集可能引用前两轮已消费的属性
pub fn try_match_classes<D>(
    style: &mut DeclarationSet,
    dict: &D,
    options: &MatchOptions,
) -> Vec<String>
where
    D: DictionaryLookup + ?Sized,
{
    let mut diagnostics = Vec::new();
    run_passes(style, dict, options, &mut diagnostics)
}

/// 对声明集合的副本执行匹配，返回类名、剩余声明和诊断信息
///
/// # 参数
///
/// * `style` - 单个元素的样式声明
/// * `dict` - 工具类字典（需要从外部传入以保持解耦）
/// * `options` - 匹配选项
pub fn translate<D>(style: &DeclarationSet, dict: &D, options: &MatchOptions) -> MatchResult
where
    D: DictionaryLookup + ?Sized,
{
    let mut residual = style.clone();
    let mut diagnostics = Vec::new();
    let classes = run_passes(&mut residual, dict, options, &mut diagnostics);

    MatchResult {
        classes,
        residual,
        diagnostics,
    }
}

fn run_passes<D>(
    style: &mut DeclarationSet,
    dict: &D,
    options: &MatchOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String>
where
    D: DictionaryLookup + ?Sized,
{
    let mut classes = Vec::new();

    if let Some(class) = match_font_size(style, dict) {
        log::trace!("font-size pass matched {}", class);
        classes.push(class);
    }

    for property in BoxProperty::ALL {
        let matched = match_box_property(style, property, dict, options, diagnostics);
        log::trace!("{} pass matched {:?}", property.name(), matched);
        classes.extend(matched);
    }

    match_rule_sets(style, dict, options, &mut classes, diagnostics);

    classes
}

/// 字号匹配
fn match_font_size<D>(style: &mut DeclarationSet, dict: &D) -> Option<String>
where
    D: DictionaryLookup + ?Sized,
{
    let font_size = style.get("font-size").and_then(|v| parse_px(v))?;
    let class = format!("{}fs-{}", CLASS_NAMESPACE, font_size);
    if !dict.contains_class(&class) {
        return None;
    }

    style.shift_remove("font-size");
    let line_height = style.get("line-height").and_then(|v| parse_px(v));
    if line_height == Some(font_size) {
        style.shift_remove("line-height");
    }

    Some(class)
}

/// 盒模型简写匹配
fn match_box_property<D>(
    style: &mut DeclarationSet,
    property: BoxProperty,
    dict: &D,
    options: &MatchOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String>
where
    D: DictionaryLookup + ?Sized,
{
    let Some(value) = style.get(property.name()).cloned() else {
        return Vec::new();
    };

    let Some(sides) = parse_shorthand(&value) else {
        log::debug!("skip {}: unsupported value count in {:?}", property.name(), value);
        diagnostics.push(Diagnostic::info(format!(
            "{}: expected 1-4 values, got {:?}",
            property.name(),
            value
        )));
        return Vec::new();
    };

    let Some(matched) = match_combined(property, &sides, dict) else {
        log::debug!("skip {}: non-pixel value {:?}", property.name(), value);
        diagnostics.push(Diagnostic::info(format!(
            "{}: {:?} is not an integer pixel value",
            property.name(),
            value
        )));
        return Vec::new();
    };

    if matched.is_empty() {
        return Vec::new();
    }

    let unmatched: Vec<Declaration> = if options.preserve_unmatched_sides {
        Side::ALL
            .iter()
            .filter(|&&side| !matched.covers(side))
            .map(|&side| Declaration::new(property.longhand(side), sides.get(side).clone()))
            .collect()
    } else {
        Vec::new()
    };

    if !options.preserve_unmatched_sides && matched.covered.len() < Side::ALL.len() {
        diagnostics.push(Diagnostic::warning(format!(
            "{}: {:?} only partially matched, unmatched sides dropped",
            property.name(),
            value
        )));
    }

    replace_shorthand(style, property, unmatched);
    matched.classes
}

/// 用子属性声明替换简写属性，保持其原位置
///
/// 位于简写之前的同组子属性已被简写覆盖，直接丢弃
fn replace_shorthand(
    style: &mut DeclarationSet,
    property: BoxProperty,
    longhands: Vec<Declaration>,
) {
    let Some(index) = style.get_index_of(property.name()) else {
        return;
    };

    let overridden: Vec<&str> = Side::ALL.iter().map(|&s| property.longhand(s)).collect();
    let mut rebuilt = DeclarationSet::with_capacity(style.len() + longhands.len());
    let mut longhands = Some(longhands);

    for (i, (key, value)) in std::mem::take(style).into_iter().enumerate() {
        if i < index && overridden.contains(&key.as_str()) {
            continue;
        }
        if i == index {
            for decl in longhands.take().unwrap_or_default() {
                rebuilt.insert(decl.property, decl.value);
            }
            continue;
        }
        rebuilt.insert(key, value);
    }

    *style = rebuilt;
}

/// 规则集只覆盖简写的部分方向时，将简写拆为未覆盖方向的子属性
///
/// 被覆盖的方向随后由规则集消费，`remove_matched` 不再需要整组覆盖
fn split_partially_covered(style: &mut DeclarationSet, rules: &RuleSet) {
    for property in BoxProperty::ALL {
        let Some(sides) = style.get(property.name()).and_then(|v| parse_shorthand(v)) else {
            continue;
        };
        let (covered, uncovered): (Vec<Declaration>, Vec<Declaration>) = sides
            .longhands(property)
            .into_iter()
            .partition(|d| rules.contains(&declaration_key(&d.property, &d.value)));
        if covered.is_empty() || uncovered.is_empty() {
            continue;
        }
        replace_shorthand(style, property, uncovered);
    }
}

/// 通用规则集匹配
fn match_rule_sets<D>(
    style: &mut DeclarationSet,
    dict: &D,
    options: &MatchOptions,
    classes: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) where
    D: DictionaryLookup + ?Sized,
{
    for entry in dict.entries() {
        if entry.rules.is_empty() && options.skip_empty_rule_sets {
            log::debug!("skip empty rule set for {}", entry.class_name);
            diagnostics.push(Diagnostic::warning(format!(
                "{} has no declarations and was skipped",
                entry.class_name
            )));
            continue;
        }
        if matches(style, &entry.rules) {
            log::trace!("rule set matched {}", entry.class_name);
            // 已输出的类名不重复追加，但仍要消费它覆盖的声明
            if !classes.contains(&entry.class_name) {
                classes.push(entry.class_name.clone());
            }
            if options.preserve_unmatched_sides {
                split_partially_covered(style, &entry.rules);
            }
            remove_matched(style, &entry.rules);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{style, SimpleDictionary};
    use pretty_assertions::assert_eq;

    fn dictionary() -> SimpleDictionary {
        SimpleDictionary::new(&[
            ("wz-fs-16", "font-size: 16px;\nline-height: 16px;"),
            ("wz-ptb-10", "padding-top: 10px;\npadding-bottom: 10px;"),
            ("wz-plr-10", "padding-left: 10px;\npadding-right: 10px;"),
            ("wz-pt-10", "padding-top: 10px;"),
            ("wz-mlr-20", "margin-left: 20px;\nmargin-right: 20px;"),
            ("wz-flex", "display: flex;"),
            (
                "wz-flex-center",
                "display: flex;\nalign-items: center;\njustify-content: center;",
            ),
            ("wz-items-center", "align-items: center;"),
            ("wz-bold", "font-weight: 700;"),
        ])
    }

    fn run(input: &[(&str, &str)]) -> (Vec<String>, DeclarationSet) {
        let mut decls = style(input);
        let classes = try_match_classes(&mut decls, &dictionary(), &MatchOptions::default());
        (classes, decls)
    }

    #[test]
    fn test_empty_style() {
        let (classes, residual) = run(&[]);
        assert!(classes.is_empty());
        assert!(residual.is_empty());
    }

    #[test]
    fn test_font_size_with_equal_line_height() {
        let (classes, residual) = run(&[("font-size", "16px"), ("line-height", "16px")]);
        assert_eq!(classes, vec!["wz-fs-16"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_font_size_with_different_line_height() {
        let (classes, residual) = run(&[("font-size", "16px"), ("line-height", "20px")]);
        assert_eq!(classes, vec!["wz-fs-16"]);
        assert_eq!(residual, style(&[("line-height", "20px")]));
    }

    #[test]
    fn test_font_size_without_class() {
        let (classes, residual) = run(&[("font-size", "13px")]);
        assert!(classes.is_empty());
        assert_eq!(residual, style(&[("font-size", "13px")]));
    }

    #[test]
    fn test_padding_all_equal() {
        let (classes, residual) = run(&[("padding", "10px")]);
        assert_eq!(classes, vec!["wz-ptb-10", "wz-plr-10"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_padding_partial_match_preserves_sides() {
        let (classes, residual) = run(&[("color", "red"), ("padding", "10px 24px"), ("opacity", "1")]);
        assert_eq!(classes, vec!["wz-ptb-10"]);
        assert_eq!(
            residual,
            style(&[
                ("color", "red"),
                ("padding-right", "24px"),
                ("padding-left", "24px"),
                ("opacity", "1"),
            ])
        );
        let keys: Vec<&str> = residual.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "padding-right", "padding-left", "opacity"]);
    }

    #[test]
    fn test_padding_partial_match_legacy_drops_sides() {
        let mut decls = style(&[("padding", "10px 24px")]);
        let result = translate(&decls, &dictionary(), &MatchOptions::legacy());
        assert_eq!(result.classes, vec!["wz-ptb-10"]);
        assert!(result.residual.is_empty());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("partially matched")));

        // translate 不修改输入
        let classes = try_match_classes(&mut decls, &dictionary(), &MatchOptions::legacy());
        assert_eq!(classes, vec!["wz-ptb-10"]);
        assert!(decls.is_empty());
    }

    #[test]
    fn test_shorthand_overrides_earlier_longhand() {
        let (classes, residual) = run(&[("padding-top", "4px"), ("padding", "10px")]);
        assert_eq!(classes, vec!["wz-ptb-10", "wz-plr-10"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_later_longhand_survives_shorthand_match() {
        let (classes, residual) = run(&[("padding", "10px"), ("padding-top", "4px")]);
        assert_eq!(classes, vec!["wz-ptb-10", "wz-plr-10"]);
        assert_eq!(residual, style(&[("padding-top", "4px")]));
    }

    #[test]
    fn test_margin_non_numeric_left_in_residual() {
        let (classes, residual) = run(&[("margin", "0 auto")]);
        assert!(classes.is_empty());
        assert_eq!(residual, style(&[("margin", "0 auto")]));
    }

    #[test]
    fn test_malformed_shorthand_left_in_residual() {
        let (classes, residual) = run(&[("padding", "1px 2px 3px 4px 5px"), ("display", "flex")]);
        assert_eq!(classes, vec!["wz-flex"]);
        assert_eq!(residual, style(&[("padding", "1px 2px 3px 4px 5px")]));
    }

    #[test]
    fn test_generic_order_earlier_entry_consumes() {
        // wz-flex 先于 wz-flex-center，消费 display 后后者无法匹配
        let (classes, residual) = run(&[
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
        ]);
        assert_eq!(classes, vec!["wz-flex", "wz-items-center"]);
        assert_eq!(residual, style(&[("justify-content", "center")]));
    }

    #[test]
    fn test_generic_pass_uses_expanded_margin() {
        let (classes, residual) = run(&[("margin", "0 20px 0")]);
        // 组合类匹配到 mlr-20，上下 0 作为子属性保留
        assert_eq!(classes, vec!["wz-mlr-20"]);
        assert_eq!(
            residual,
            style(&[("margin-top", "0"), ("margin-bottom", "0")])
        );
    }

    #[test]
    fn test_passes_run_in_fixed_order() {
        let (classes, residual) = run(&[
            ("font-weight", "700"),
            ("display", "flex"),
            ("padding", "10px"),
            ("font-size", "16px"),
        ]);
        assert_eq!(classes, vec!["wz-fs-16", "wz-ptb-10", "wz-plr-10", "wz-flex", "wz-bold"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_no_match_keeps_everything() {
        let input = [("color", "#333"), ("border", "1px solid #eee")];
        let (classes, residual) = run(&input);
        assert!(classes.is_empty());
        assert_eq!(residual, style(&input));
    }

    #[test]
    fn test_idempotent_on_residual() {
        let (_, residual) = run(&[
            ("padding", "10px 24px"),
            ("font-size", "16px"),
            ("line-height", "22px"),
            ("display", "flex"),
            ("color", "red"),
        ]);
        let mut again = residual.clone();
        let classes = try_match_classes(&mut again, &dictionary(), &MatchOptions::default());
        assert!(classes.is_empty());
        assert_eq!(again, residual);

        // 简写已输出的类名在通用阶段再次命中同侧长写
        let dict = SimpleDictionary::new(&[
            ("wz-ptb-10", "padding-top: 10px;\npadding-bottom: 10px;"),
            ("wz-plr-10", "padding-left: 10px;\npadding-right: 10px;"),
        ]);
        let mut first = style(&[
            ("padding", "10px"),
            ("padding-top", "10px"),
            ("padding-bottom", "10px"),
        ]);
        let classes = try_match_classes(&mut first, &dict, &MatchOptions::default());
        assert_eq!(classes, vec!["wz-ptb-10", "wz-plr-10"]);
        let mut again = first.clone();
        let classes = try_match_classes(&mut again, &dict, &MatchOptions::default());
        assert!(classes.is_empty());
        assert_eq!(again, first);
    }

    #[test]
    fn test_empty_rule_set_guard() {
        let dict = SimpleDictionary::new(&[("wz-broken", "\n;\n"), ("wz-flex", "display: flex;")]);
        let decls = style(&[("display", "flex")]);

        let guarded = translate(&decls, &dict, &MatchOptions::default());
        assert_eq!(guarded.classes, vec!["wz-flex"]);
        assert_eq!(guarded.diagnostics.len(), 1);

        let unguarded = translate(&decls, &dict, &MatchOptions::legacy());
        assert_eq!(unguarded.classes, vec!["wz-broken", "wz-flex"]);
    }

    #[test]
    fn test_generic_pass_matches_preserved_sides() {
        let dict = SimpleDictionary::new(&[
            ("wz-pt-10", "padding-top: 10px;"),
            ("wz-pl-4", "padding-left: 4px;"),
        ]);
        let decls = style(&[("padding", "10px 4px 8px")]);
        let result = translate(&decls, &dict, &MatchOptions::default());
        assert_eq!(result.classes, vec!["wz-pt-10", "wz-pl-4"]);
        assert_eq!(
            result.residual,
            style(&[("padding-right", "4px"), ("padding-bottom", "8px")])
        );
    }

    #[test]
    fn test_generic_pass_consumes_already_emitted_class() {
        let (classes, residual) = run(&[
            ("padding", "10px"),
            ("padding-top", "10px"),
            ("padding-bottom", "10px"),
        ]);
        assert_eq!(classes, vec!["wz-ptb-10", "wz-plr-10"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_font_size_leading_zero_parses_numerically() {
        let (classes, residual) = run(&[("font-size", "016px"), ("line-height", "16px")]);
        assert_eq!(classes, vec!["wz-fs-16"]);
        assert!(residual.is_empty());
    }

    #[test]
    fn test_generic_pass_splits_non_pixel_shorthand() {
        let dict = SimpleDictionary::new(&[
            ("wz-mtb-0", "margin-top: 0;\nmargin-bottom: 0;"),
            ("wz-mt-0", "margin-top: 0;"),
            ("wz-mx-auto", "margin-left: auto;\nmargin-right: auto;"),
        ]);
        let decls = style(&[("margin", "0 auto")]);

        let result = translate(&decls, &dict, &MatchOptions::default());
        assert_eq!(result.classes, vec!["wz-mtb-0", "wz-mx-auto"]);
        assert!(result.residual.is_empty());

        // legacy：简写未被整组覆盖时保留，后续规则集重复命中
        let legacy = translate(&decls, &dict, &MatchOptions::legacy());
        assert_eq!(legacy.classes, vec!["wz-mtb-0", "wz-mt-0", "wz-mx-auto"]);
        assert_eq!(legacy.residual, style(&[("margin", "0 auto")]));
    }
}

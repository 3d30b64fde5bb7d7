use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use wzmap_core::{
    format_classes, format_residual, merge_declarations, render_slot, translate as rs_translate,
    Declaration, DeclarationSet, MatchOptions, OutputSlot, ResidualPolicy,
};
use wzmap_index::{load_from_json, WzIndex};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsMatchOptions {
    #[serde(default)]
    residual_policy: JsResidualPolicy,
    #[serde(default = "default_true")]
    preserve_unmatched_sides: bool,
    #[serde(default = "default_true")]
    skip_empty_rule_sets: bool,
}

impl Default for JsMatchOptions {
    fn default() -> Self {
        JsMatchOptions {
            residual_policy: JsResidualPolicy::default(),
            preserve_unmatched_sides: true,
            skip_empty_rule_sets: true,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
enum JsResidualPolicy {
    #[default]
    Always,
    EmptyWhenUnmatched,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum JsOutputSlot {
    ClassName,
    Css,
    Original,
    Empty,
}

/// 样式输入：属性对象，或 `{ property, value }` 数组
#[derive(Deserialize)]
#[serde(untagged)]
enum JsStyle {
    Map(IndexMap<String, Option<String>>),
    List(Vec<Declaration>),
}

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTranslateResult {
    classes: Vec<String>,
    class_name: String,
    css: String,
    diagnostics: Vec<String>,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsResidualPolicy> for ResidualPolicy {
    fn from(p: JsResidualPolicy) -> Self {
        match p {
            JsResidualPolicy::Always => ResidualPolicy::Always,
            JsResidualPolicy::EmptyWhenUnmatched => ResidualPolicy::EmptyWhenUnmatched,
        }
    }
}

impl From<JsOutputSlot> for OutputSlot {
    fn from(s: JsOutputSlot) -> Self {
        match s {
            JsOutputSlot::ClassName => OutputSlot::ClassName,
            JsOutputSlot::Css => OutputSlot::Css,
            JsOutputSlot::Original => OutputSlot::Original,
            JsOutputSlot::Empty => OutputSlot::Empty,
        }
    }
}

impl From<JsMatchOptions> for MatchOptions {
    fn from(opts: JsMatchOptions) -> Self {
        MatchOptions {
            residual_policy: opts.residual_policy.into(),
            preserve_unmatched_sides: opts.preserve_unmatched_sides,
            skip_empty_rule_sets: opts.skip_empty_rule_sets,
        }
    }
}

fn parse_options(options: JsValue) -> Result<MatchOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsMatchOptions::default().into())
    } else {
        serde_wasm_bindgen::from_value::<JsMatchOptions>(options)
            .map(Into::into)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_slot(slot: JsValue) -> Result<OutputSlot, JsError> {
    serde_wasm_bindgen::from_value::<JsOutputSlot>(slot)
        .map(Into::into)
        .map_err(|e| JsError::new(&format!("Invalid output slot: {}", e)))
}

fn parse_style(style: JsValue) -> Result<DeclarationSet, JsError> {
    let raw: JsStyle = serde_wasm_bindgen::from_value(style)
        .map_err(|e| JsError::new(&format!("Invalid style object: {}", e)))?;
    Ok(collect_style(raw))
}

/// 对象形式丢弃 undefined/null 值，数组形式按声明顺序合并
fn collect_style(raw: JsStyle) -> DeclarationSet {
    match raw {
        JsStyle::Map(map) => map
            .into_iter()
            .filter_map(|(property, value)| value.map(|v| (property, v)))
            .collect(),
        JsStyle::List(declarations) => merge_declarations(declarations),
    }
}

fn transform_style(
    index: &WzIndex,
    style: &DeclarationSet,
    slot: OutputSlot,
    options: &MatchOptions,
) -> String {
    match slot {
        OutputSlot::Original | OutputSlot::Empty => {
            render_slot(slot, style, &Default::default(), options)
        }
        OutputSlot::ClassName | OutputSlot::Css => {
            let result = rs_translate(style, index, options);
            render_slot(slot, style, &result, options)
        }
    }
}

fn translate_style(
    index: &WzIndex,
    style: &DeclarationSet,
    options: &MatchOptions,
) -> JsTranslateResult {
    let result = rs_translate(style, index, options);
    let css = render_slot(OutputSlot::Css, style, &result, options);

    JsTranslateResult {
        class_name: format_classes(&result.classes),
        css,
        diagnostics: result.diagnostics.into_iter().map(|d| d.message).collect(),
        classes: result.classes,
    }
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 工具类匹配器
///
/// 启动时由字典 JSON 构建一次，之后只读
#[wasm_bindgen]
pub struct WzTranslator {
    index: WzIndex,
}

#[wasm_bindgen]
impl WzTranslator {
    /// @param dictionary - `{ [className]: "prop: value;\n..." }` 形式的 JSON 字符串
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary: &str) -> Result<WzTranslator, JsError> {
        let index = load_from_json(dictionary).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WzTranslator { index })
    }

    /// 字典中的类名数量
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// 渲染单个输出槽
    ///
    /// @param style   - 属性名 → 值，或 `{ property, value }` 数组
    /// @param slot    - "className" | "css" | "original" | "empty"
    /// @param options - 匹配选项，可选
    pub fn transform(
        &self,
        style: JsValue,
        slot: JsValue,
        options: JsValue,
    ) -> Result<String, JsError> {
        let style = parse_style(style)?;
        let slot = parse_slot(slot)?;
        let options = parse_options(options)?;
        Ok(transform_style(&self.index, &style, slot, &options))
    }

    /// 一次性返回 `{ classes, className, css, diagnostics }`
    pub fn translate(&self, style: JsValue, options: JsValue) -> Result<JsValue, JsError> {
        let style = parse_style(style)?;
        let options = parse_options(options)?;
        let result = translate_style(&self.index, &style, &options);
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// 原始 CSS 文本，不做任何匹配
#[wasm_bindgen(js_name = "formatStyle")]
pub fn format_style(style: JsValue) -> Result<String, JsError> {
    let style = parse_style(style)?;
    Ok(format_residual(&style))
}

use indexmap::IndexMap;
use serde::Deserialize;

use crate::index::WzIndex;

/// 字典加载错误
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid dictionary json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ClassMapping {
    class: String,
    css: String,
}

/// 从 JSON 对象加载工具类字典
///
/// 键为类名，值为多行声明文本（每行一条 `property: value;`），条目顺序即匹配顺序。
///
/// JSON 格式示例：
/// ```json
/// {
///   "wz-flex": "display: flex;",
///   "wz-ptb-10": "padding-top: 10px;\npadding-bottom: 10px;"
/// }
/// ```
pub fn load_from_json(json_str: &str) -> Result<WzIndex, LoadError> {
    let mappings: IndexMap<String, String> = serde_json::from_str(json_str)?;
    let index = WzIndex::from_blobs(mappings);
    report_empty(&index);
    Ok(index)
}

/// 从 JSON 数组加载工具类字典
///
/// JSON 格式示例：
/// ```json
/// [
///   { "class": "wz-flex", "css": "display: flex;" }
/// ]
/// ```
pub fn load_from_mappings_json(json_str: &str) -> Result<WzIndex, LoadError> {
    let mappings: Vec<ClassMapping> = serde_json::from_str(json_str)?;
    let index = WzIndex::from_blobs(mappings.into_iter().map(|m| (m.class, m.css)));
    report_empty(&index);
    Ok(index)
}

fn report_empty(index: &WzIndex) {
    for class in index.empty_rule_sets() {
        log::debug!("{} has no parsable declarations", class);
    }
}

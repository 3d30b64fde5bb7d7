use crate::types::{Declaration, DeclarationSet};

/// 将声明列表合并为声明集合
///
/// 功能：
/// - 处理 CSS 属性冲突（后者覆盖前者）
/// - 保持稳定输出顺序（使用 IndexMap，按首次出现排序）
pub fn merge_declarations(decls: Vec<Declaration>) -> DeclarationSet {
    let mut map = DeclarationSet::new();

    for decl in decls {
        map.insert(decl.property, decl.value);
    }

    map
}

/// 规范化一行声明文本
///
/// 功能：
/// 1. 去除首尾空白，丢弃空行
/// 2. 去掉结尾的一个 `;`
/// 3. 按第一个 `:` 拆分，属性名和值各自 trim
/// 4. 值内部的连续空白压缩为单个空格
///
/// 输出形式为 `property:value`（冒号两侧无空格），缺少 `:` 或属性名/值为空时返回 None
pub fn normalize_rule(line: &str) -> Option<String> {
    let line = line.trim();
    let line = line.strip_suffix(';').unwrap_or(line);
    let (property, value) = line.split_once(':')?;
    let property = property.trim();
    let value = collapse_whitespace(value);
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(format!("{}:{}", property, value))
}

/// 声明集合一侧的规范化 key，与 `normalize_rule` 产出同一形式
pub fn declaration_key(property: &str, value: &str) -> String {
    format!("{}:{}", property.trim(), collapse_whitespace(value))
}

/// 匹配 `^\d+px$`，返回像素数值
pub fn parse_px(value: &str) -> Option<i64> {
    let digits = value.strip_suffix("px")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// 解析盒模型值的整数像素大小
///
/// 接受可选符号 + 数字 + 可选 `px` 后缀（`0`、`10px`、`-4px`），
/// 其余（`auto`、`1rem`、`10.5px`、`calc(...)`）均视为非数值
pub fn parse_box_magnitude(value: &str) -> Option<i64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    let digits = number
        .strip_prefix('-')
        .or_else(|| number.strip_prefix('+'))
        .unwrap_or(number);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

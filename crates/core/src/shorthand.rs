use crate::types::Declaration;

/// 支持展开的盒模型简写属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxProperty {
    Padding,
    Margin,
}

/// 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// CSS 简写的书写顺序
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// 简写属性组定义
struct ShorthandGroup {
    /// 简写属性名（如 "padding"）
    shorthand: &'static str,
    /// 工具类前缀（如 "p"）
    class_prefix: &'static str,
    /// 各个子属性名（top, right, bottom, left）
    longhands: [&'static str; 4],
}

static PADDING: ShorthandGroup = ShorthandGroup {
    shorthand: "padding",
    class_prefix: "p",
    longhands: [
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
    ],
};

static MARGIN: ShorthandGroup = ShorthandGroup {
    shorthand: "margin",
    class_prefix: "m",
    longhands: ["margin-top", "margin-right", "margin-bottom", "margin-left"],
};

impl BoxProperty {
    /// 匹配顺序：先 padding 后 margin
    pub const ALL: [BoxProperty; 2] = [BoxProperty::Padding, BoxProperty::Margin];

    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "padding" => Some(BoxProperty::Padding),
            "margin" => Some(BoxProperty::Margin),
            _ => None,
        }
    }

    fn group(self) -> &'static ShorthandGroup {
        match self {
            BoxProperty::Padding => &PADDING,
            BoxProperty::Margin => &MARGIN,
        }
    }

    pub fn name(self) -> &'static str {
        self.group().shorthand
    }

    pub fn class_prefix(self) -> &'static str {
        self.group().class_prefix
    }

    pub fn longhand(self, side: Side) -> &'static str {
        let longhands = &self.group().longhands;
        match side {
            Side::Top => longhands[0],
            Side::Right => longhands[1],
            Side::Bottom => longhands[2],
            Side::Left => longhands[3],
        }
    }
}

/// 展开后的四个方向值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> BoxSides<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn try_map<U>(&self, mut f: impl FnMut(&T) -> Option<U>) -> Option<BoxSides<U>> {
        Some(BoxSides {
            top: f(&self.top)?,
            right: f(&self.right)?,
            bottom: f(&self.bottom)?,
            left: f(&self.left)?,
        })
    }
}

impl BoxSides<String> {
    /// 生成四个子属性声明（top, right, bottom, left 顺序）
    pub fn longhands(&self, property: BoxProperty) -> Vec<Declaration> {
        Side::ALL
            .iter()
            .map(|&side| Declaration::new(property.longhand(side), self.get(side).clone()))
            .collect()
    }
}

/// 按 CSS 简写规则解析 1~4 个值
///
/// - 1 个值：四边相同
/// - 2 个值：上下 / 左右
/// - 3 个值：上 / 左右 / 下
/// - 4 个值：上 / 右 / 下 / 左
///
/// 其它数量返回 None
///
/// ```
/// use wzmap_core::shorthand::parse_shorthand;
///
/// let sides = parse_shorthand("10px 20px 30px").unwrap();
/// assert_eq!(sides.top, "10px");
/// assert_eq!(sides.right, "20px");
/// assert_eq!(sides.bottom, "30px");
/// assert_eq!(sides.left, "20px");
/// ```
pub fn parse_shorthand(value: &str) -> Option<BoxSides<String>> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let (top, right, bottom, left) = match tokens.as_slice() {
        [all] => (*all, *all, *all, *all),
        [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
        [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
        [top, right, bottom, left] => (*top, *right, *bottom, *left),
        _ => return None,
    };
    Some(BoxSides {
        top: top.to_string(),
        right: right.to_string(),
        bottom: bottom.to_string(),
        left: left.to_string(),
    })
}

/// 将简写声明展开为子属性声明
///
/// 非 padding/margin 属性或值数量不合法时返回空列表
pub fn expand_shorthand(property: &str, value: &str) -> Vec<Declaration> {
    let Some(box_property) = BoxProperty::from_property(property) else {
        return Vec::new();
    };
    parse_shorthand(value)
        .map(|sides| sides.longhands(box_property))
        .unwrap_or_default()
}

use serde::{Deserialize, Serialize};

/// 块级节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph { children: Vec<Inline> },
    BulletedList { items: Vec<Vec<Inline>> },
    NumberedList { items: Vec<Vec<Inline>> },
}

/// 行内节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text { text: String },
    Bold { text: String },
    Underline { text: String },
    Italic { text: String },
    Code { text: String },
    ColoredSpan { color: String, children: Vec<Inline> },
    SizedSpan { size: String, children: Vec<Inline> },
    Link { label: String, href: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }
}

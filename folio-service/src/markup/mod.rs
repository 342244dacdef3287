//! 文章正文的轻量标记渲染
//!
//! 支持段落、无序/有序列表，以及粗体、下划线、斜体、行内代码、
//! 颜色/字号span和http(s)链接。无法识别的语法原样作为文本输出。

mod block;
mod inline;

pub use block::parse_blocks;
pub use inline::{parse_inline, sanitize_color, sanitize_size, MAX_SPAN_DEPTH};

use folio_domain::content::constant::EMPTY_CONTENT_PLACEHOLDER;
use folio_domain::markup::{Block, Inline};

/// 把文章正文渲染为节点树
///
/// 纯函数：相同输入总是得到相同的节点树。
pub fn render(content: &str) -> Vec<Block> {
    let blocks = parse_blocks(content);
    if blocks.is_empty() {
        return vec![Block::Paragraph {
            children: vec![Inline::text(EMPTY_CONTENT_PLACEHOLDER)],
        }];
    }
    blocks
}

use folio_domain::markup::Block;
use regex::Regex;
use std::sync::LazyLock;

use super::inline::parse_inline;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("numbered item pattern"));

/// 逐行累积块，遇到空行或不同类型的行时输出
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    bullets: Vec<String>,
    numbered: Vec<String>,
}

impl BlockBuilder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        self.blocks.push(Block::Paragraph {
            children: parse_inline(&text),
        });
    }

    fn flush_bullets(&mut self) {
        if self.bullets.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.bullets)
            .iter()
            .map(|item| parse_inline(item))
            .collect();
        self.blocks.push(Block::BulletedList { items });
    }

    fn flush_numbered(&mut self) {
        if self.numbered.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.numbered)
            .iter()
            .map(|item| parse_inline(item))
            .collect();
        self.blocks.push(Block::NumberedList { items });
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_bullets();
        self.flush_numbered();
    }

    fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush_all();
        } else if let Some(item) = line.strip_prefix("- ") {
            self.flush_paragraph();
            self.flush_numbered();
            self.bullets.push(item.trim().to_string());
        } else if let Some(caps) = NUMBERED_ITEM.captures(line) {
            self.flush_paragraph();
            self.flush_bullets();
            // 只保留顺序，不保留原始编号
            let item = caps.get(1).map_or("", |m| m.as_str());
            self.numbered.push(item.trim().to_string());
        } else {
            self.flush_bullets();
            self.flush_numbered();
            self.paragraph.push(line.to_string());
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_all();
        self.blocks
    }
}

/// 块级解析，空输入返回空列表
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for raw in content.split('\n') {
        builder.push_line(raw.trim());
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::markup::Inline;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::text(s)]
    }

    #[test]
    fn test_paragraph_lines_joined_with_space() {
        assert_eq!(
            parse_blocks("first line\nsecond line\r\n\nnext"),
            vec![
                Block::Paragraph { children: text("first line second line") },
                Block::Paragraph { children: text("next") },
            ]
        );
    }

    #[test]
    fn test_bullets_accumulate() {
        assert_eq!(
            parse_blocks("- one\n- two\n\n- three"),
            vec![
                Block::BulletedList { items: vec![text("one"), text("two")] },
                Block::BulletedList { items: vec![text("three")] },
            ]
        );
    }

    #[test]
    fn test_numbering_discarded() {
        assert_eq!(
            parse_blocks("3. c\n10.   d"),
            vec![Block::NumberedList { items: vec![text("c"), text("d")] }]
        );
    }

    #[test]
    fn test_paragraph_then_list_then_paragraph() {
        assert_eq!(
            parse_blocks("intro\n- a\n- b\noutro"),
            vec![
                Block::Paragraph { children: text("intro") },
                Block::BulletedList { items: vec![text("a"), text("b")] },
                Block::Paragraph { children: text("outro") },
            ]
        );
    }

    #[test]
    fn test_numbered_then_bullet_are_separate() {
        assert_eq!(
            parse_blocks("1. a\n- b\n2. c"),
            vec![
                Block::NumberedList { items: vec![text("a")] },
                Block::BulletedList { items: vec![text("b")] },
                Block::NumberedList { items: vec![text("c")] },
            ]
        );
    }

    #[test]
    fn test_non_list_lookalikes_are_paragraphs() {
        assert_eq!(
            parse_blocks("-no space\n1.no space"),
            vec![Block::Paragraph { children: text("-no space 1.no space") }]
        );
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks(" \n\t\n").is_empty());
    }
}

use folio_domain::markup::Inline;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// span 嵌套的最大深度，超过后正文按原样输出
pub const MAX_SPAN_DEPTH: usize = 8;

/// 按优先级排列的行内语法，一次匹配最左侧的记号
static INLINE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\{color:\s*([^}]*)\}([\s\S]*?)\{/color\}",
        r"|\{size:\s*([^}]*)\}([\s\S]*?)\{/size\}",
        r"|\[([^\]]+)\]\((https?://[^\s)]+)\)",
        r"|\*\*([^*]+)\*\*",
        r"|__([^_]+)__",
        r"|\*([^*]+)\*",
        r"|`([^`]+)`",
    ))
    .expect("inline token pattern")
});

/// 只接受3/6/8位十六进制颜色
pub fn sanitize_color(value: &str) -> Option<String> {
    let value = value.trim();
    let hex = value.strip_prefix('#')?;
    let valid = matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| value.to_string())
}

/// 只接受 `10px` 到 `72px` 之间、1到3位数字的字号
pub fn sanitize_size(value: &str) -> Option<String> {
    let digits = value.trim().strip_suffix("px")?;
    if digits.is_empty() || digits.len() > 3 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let size: u32 = digits.parse().ok()?;
    (10..=72).contains(&size).then(|| format!("{}px", size))
}

/// 行内解析
pub fn parse_inline(text: &str) -> Vec<Inline> {
    parse_at_depth(text, 0)
}

fn push_node(nodes: &mut Vec<Inline>, node: Inline) {
    // 相邻文本节点合并，去掉包装后的span不会把文本切碎
    if let (Some(Inline::Text { text: last }), Inline::Text { text }) = (nodes.last_mut(), &node) {
        last.push_str(text);
        return;
    }
    nodes.push(node);
}

fn push_text(nodes: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        push_node(nodes, Inline::text(text));
    }
}

fn parse_at_depth(text: &str, depth: usize) -> Vec<Inline> {
    let mut nodes = Vec::new();
    if depth > MAX_SPAN_DEPTH {
        push_text(&mut nodes, text);
        return nodes;
    }

    let mut cursor = 0;
    for caps in INLINE_TOKEN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut nodes, &text[cursor..whole.start()]);
        for node in token_nodes(&caps, depth) {
            push_node(&mut nodes, node);
        }
        cursor = whole.end();
    }
    push_text(&mut nodes, &text[cursor..]);
    nodes
}

fn token_nodes(caps: &Captures<'_>, depth: usize) -> Vec<Inline> {
    let group = |i: usize| caps.get(i).map(|m| m.as_str());

    if let (Some(value), Some(body)) = (group(1), group(2)) {
        let children = parse_at_depth(body, depth + 1);
        return match sanitize_color(value) {
            Some(color) => vec![Inline::ColoredSpan { color, children }],
            None => children,
        };
    }
    if let (Some(value), Some(body)) = (group(3), group(4)) {
        let children = parse_at_depth(body, depth + 1);
        return match sanitize_size(value) {
            Some(size) => vec![Inline::SizedSpan { size, children }],
            None => children,
        };
    }
    if let (Some(label), Some(href)) = (group(5), group(6)) {
        return vec![Inline::Link {
            label: label.to_string(),
            href: href.to_string(),
        }];
    }

    let styled = if let Some(t) = group(7) {
        Inline::Bold { text: t.to_string() }
    } else if let Some(t) = group(8) {
        Inline::Underline { text: t.to_string() }
    } else if let Some(t) = group(9) {
        Inline::Italic { text: t.to_string() }
    } else if let Some(t) = group(10) {
        Inline::Code { text: t.to_string() }
    } else {
        Inline::text(group(0).unwrap_or_default())
    };
    vec![styled]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(s: &str) -> Inline {
        Inline::Bold { text: s.to_string() }
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(parse_inline("just text"), vec![Inline::text("just text")]);
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_all_simple_styles() {
        assert_eq!(
            parse_inline("a **b** __c__ *d* `e`"),
            vec![
                Inline::text("a "),
                bold("b"),
                Inline::text(" "),
                Inline::Underline { text: "c".to_string() },
                Inline::text(" "),
                Inline::Italic { text: "d".to_string() },
                Inline::text(" "),
                Inline::Code { text: "e".to_string() },
            ]
        );
    }

    #[test]
    fn test_link_requires_http_scheme() {
        assert_eq!(
            parse_inline("see [docs](https://example.com/a)"),
            vec![
                Inline::text("see "),
                Inline::Link {
                    label: "docs".to_string(),
                    href: "https://example.com/a".to_string(),
                },
            ]
        );
        assert_eq!(
            parse_inline("[x](javascript:alert(1))"),
            vec![Inline::text("[x](javascript:alert(1))")]
        );
        assert_eq!(parse_inline("[x](/relative)"), vec![Inline::text("[x](/relative)")]);
    }

    #[test]
    fn test_bold_inside_color_span() {
        assert_eq!(
            parse_inline("{color: #abc}hi **there**{/color}"),
            vec![Inline::ColoredSpan {
                color: "#abc".to_string(),
                children: vec![Inline::text("hi "), bold("there")],
            }]
        );
    }

    #[test]
    fn test_invalid_size_unwrapped_but_parsed() {
        assert_eq!(
            parse_inline("a {size: 100px}**b**{/size} c"),
            vec![Inline::text("a "), bold("b"), Inline::text(" c")]
        );
        assert_eq!(parse_inline("{size: 9px}x{/size}"), vec![Inline::text("x")]);
    }

    #[test]
    fn test_dropped_wrapper_merges_text() {
        assert_eq!(
            parse_inline("a {color: red}x{/color} b"),
            vec![Inline::text("a x b")]
        );
    }

    #[test]
    fn test_nested_spans() {
        assert_eq!(
            parse_inline("{size: 24px}big {color: #00ff00}green{/color}{/size}"),
            vec![Inline::SizedSpan {
                size: "24px".to_string(),
                children: vec![
                    Inline::text("big "),
                    Inline::ColoredSpan {
                        color: "#00ff00".to_string(),
                        children: vec![Inline::text("green")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_unmatched_markers_are_literal() {
        assert_eq!(parse_inline("**open"), vec![Inline::text("**open")]);
        assert_eq!(parse_inline("{color: #fff}open"), vec![Inline::text("{color: #fff}open")]);
    }

    #[test]
    fn test_sanitize_color() {
        assert_eq!(sanitize_color("#abc").as_deref(), Some("#abc"));
        assert_eq!(sanitize_color(" #AABBCC ").as_deref(), Some("#AABBCC"));
        assert_eq!(sanitize_color("#aabbcc80").as_deref(), Some("#aabbcc80"));
        assert_eq!(sanitize_color("#abcd"), None);
        assert_eq!(sanitize_color("red"), None);
        assert_eq!(sanitize_color("#ggg"), None);
        assert_eq!(sanitize_color("#fff;background:url(x)"), None);
    }

    #[test]
    fn test_sanitize_size() {
        assert_eq!(sanitize_size("10px").as_deref(), Some("10px"));
        assert_eq!(sanitize_size(" 72px").as_deref(), Some("72px"));
        assert_eq!(sanitize_size("012px").as_deref(), Some("12px"));
        assert_eq!(sanitize_size("9px"), None);
        assert_eq!(sanitize_size("73px"), None);
        assert_eq!(sanitize_size("1000px"), None);
        assert_eq!(sanitize_size("12em"), None);
        assert_eq!(sanitize_size("px"), None);
    }

    #[test]
    fn test_depth_cap_emits_literal_body() {
        assert_eq!(
            parse_at_depth("**x** {color: #fff}y{/color}", MAX_SPAN_DEPTH + 1),
            vec![Inline::text("**x** {color: #fff}y{/color}")]
        );
        assert_eq!(parse_at_depth("**x**", MAX_SPAN_DEPTH), vec![bold("x")]);
    }

    #[test]
    fn test_alternating_nesting_is_bounded() {
        let mut text = String::from("core");
        for i in 0..(MAX_SPAN_DEPTH * 2) {
            text = if i % 2 == 0 {
                format!("{{size: 12px}}{}{{/size}}", text)
            } else {
                format!("{{color: #fff}}{}{{/color}}", text)
            };
        }
        let nodes = parse_inline(&text);
        assert!(!nodes.is_empty());
        assert_eq!(parse_inline(&text), nodes);
    }
}

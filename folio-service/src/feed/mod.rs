//! 订阅源与发现文件：RSS 2.0、站点地图、llms.txt
//!
//! 输入都是已发布文章列表，输出纯文本，不做页面渲染。

mod llms;
mod rss;
mod sitemap;

pub use llms::build_llms_txt;
pub use rss::build_rss;
pub use sitemap::build_sitemap;

/// 转义XML文本和属性值中的特殊字符
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 按行拼接，每行以换行结尾
fn join_lines(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape(r#"a & b <c> "d" 'e'"#), "a &amp; b &lt;c&gt; &quot;d&quot; &apos;e&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn test_join_lines_ends_with_newline() {
        assert_eq!(join_lines(vec!["a".to_string(), String::new(), "b".to_string()]), "a\n\nb\n");
    }
}

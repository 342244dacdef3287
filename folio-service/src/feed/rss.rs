use folio_domain::content::{parse_post_date, Post};
use folio_domain::SiteInfo;
use super::{join_lines, xml_escape};

/// 生成RSS 2.0频道
pub fn build_rss(site: &SiteInfo, posts: &[Post]) -> String {
    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
        "<rss version=\"2.0\">".to_string(),
        "<channel>".to_string(),
        format!("<title>{}</title>", xml_escape(&site.title)),
        format!("<link>{}</link>", xml_escape(&site.absolute("/"))),
        format!("<description>{}</description>", xml_escape(&site.description)),
    ];

    for post in posts {
        let link = xml_escape(&site.post_url(&post.slug));
        lines.push("<item>".to_string());
        lines.push(format!("<title>{}</title>", xml_escape(&post.title)));
        lines.push(format!("<link>{}</link>", link));
        lines.push(format!("<guid isPermaLink=\"true\">{}</guid>", link));
        // 日期无法解析时省略pubDate
        if let Some(date) = parse_post_date(&post.date) {
            lines.push(format!("<pubDate>{}</pubDate>", date.to_rfc2822()));
        }
        lines.push(format!("<description>{}</description>", xml_escape(&post.description)));
        lines.push("</item>".to_string());
    }

    lines.push("</channel>".to_string());
    lines.push("</rss>".to_string());
    join_lines(lines)
}

use folio_domain::content::{parse_post_date, Post};
use folio_domain::site::STATIC_PAGES;
use folio_domain::SiteInfo;
use super::{join_lines, xml_escape};

/// 生成XML站点地图：静态页面加上每篇已发布文章
pub fn build_sitemap(site: &SiteInfo, posts: &[Post]) -> String {
    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">".to_string(),
    ];

    for page in STATIC_PAGES {
        lines.push(format!("<url><loc>{}</loc></url>", xml_escape(&site.absolute(page))));
    }

    for post in posts {
        let loc = xml_escape(&site.post_url(&post.slug));
        let entry = match parse_post_date(&post.date) {
            Some(date) => format!(
                "<url><loc>{}</loc><lastmod>{}</lastmod></url>",
                loc,
                date.format("%Y-%m-%d")
            ),
            None => format!("<url><loc>{}</loc></url>", loc),
        };
        lines.push(entry);
    }

    lines.push("</urlset>".to_string());
    join_lines(lines)
}

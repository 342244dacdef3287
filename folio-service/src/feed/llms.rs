use folio_domain::content::Post;
use folio_domain::site::STATIC_PAGES;
use folio_domain::SiteInfo;

use super::join_lines;

/// 生成 `llms.txt`：站点概述、页面列表和文章列表
pub fn build_llms_txt(site: &SiteInfo, posts: &[Post]) -> String {
    let mut lines = vec![
        format!("# {}", site.title),
        String::new(),
        format!("> {}", site.description),
        String::new(),
        format!("Author: {}", site.author),
        String::new(),
        "## Pages".to_string(),
        String::new(),
    ];

    for page in STATIC_PAGES {
        let name = match page.trim_start_matches('/') {
            "" => "Home",
            other => other,
        };
        lines.push(format!("- [{}]({})", name, site.absolute(page)));
    }

    lines.push(String::new());
    lines.push("## Blog posts".to_string());
    lines.push(String::new());
    if posts.is_empty() {
        lines.push("No posts published yet.".to_string());
    }
    for post in posts {
        lines.push(format!(
            "- [{}]({}): {}",
            post.title,
            site.post_url(&post.slug),
            post.description
        ));
    }
    join_lines(lines)
}

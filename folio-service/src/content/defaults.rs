use folio_domain::content::{Post, PostSource, PostStatus};

fn seed(slug: &str, title: &str, description: &str, date: &str, content: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        content: content.to_string(),
        hero_image: None,
        video_url: None,
        gallery_images: None,
        status: PostStatus::Published,
        source: PostSource::Default,
    }
}

/// 代码内置的默认文章
///
/// 运行时不可修改，只能被同slug的自定义文章覆盖或被墓碑隐藏。
pub fn default_posts() -> Vec<Post> {
    vec![
        seed(
            "building-this-site",
            "Building This Site",
            "Notes on the stack behind this portfolio and blog.",
            "2024-03-18",
            "This site is split into a small **content store**, a markup renderer and a link preview proxy.\n\
             \n\
             The pieces that matter:\n\
             - Posts are seeded in code and can be __overridden__ from the admin panel\n\
             - Deleted seed posts are hidden with a tombstone\n\
             - Link previews are cached for six hours\n\
             \n\
             Source notes live in [the repository](https://github.com/).",
        ),
        seed(
            "lessons-from-shipping-side-projects",
            "Lessons From Shipping Side Projects",
            "What finishing small projects taught me about scope.",
            "2023-11-02",
            "Most side projects stall for the same reasons.\n\
             \n\
             1. Scope grows faster than free time\n\
             2. The *interesting* part is done first\n\
             3. Nobody sees it until it ships\n\
             \n\
             {color: #d97706}Ship the boring version first.{/color}",
        ),
        seed(
            "writing-a-tiny-markup-dialect",
            "Writing a Tiny Markup Dialect",
            "Why post bodies use a constrained format instead of raw HTML.",
            "2023-06-21",
            "Post bodies support a deliberately small format: paragraphs, lists, `code`, \
             **bold**, __underline__ and *italic* text.\n\
             \n\
             Colour and size spans such as {size: 18px}this one{/size} only accept safe values, \
             so nothing from a post can inject markup into the page.",
        ),
    ]
}

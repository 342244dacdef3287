use chrono::Utc;
use folio_domain::content::{Post, PostPayload, PostSource, PostStatus};
use super::error::{ContentError, ContentResult};
use super::slug::slugify;

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 当前日期（ISO日历日期）
pub(crate) fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// 校验并规范化请求体，得到待持久化的文章
pub(crate) fn normalize(payload: PostPayload) -> ContentResult<Post> {
    let title = trimmed(payload.title)
        .ok_or_else(|| ContentError::Validation("Title is required".to_string()))?;

    let slug = match trimmed(payload.slug) {
        Some(explicit) => slugify(&explicit),
        None => slugify(&title),
    };
    if slug.is_empty() {
        return Err(ContentError::Validation(
            "Slug cannot be empty; use letters or numbers in the title or slug".to_string(),
        ));
    }

    let status = payload.status.unwrap_or_default();
    let description = trimmed(payload.description).unwrap_or_default();
    let content = trimmed(payload.content).unwrap_or_default();

    // 草稿可以缺少摘要和正文
    if status == PostStatus::Published && (description.is_empty() || content.is_empty()) {
        return Err(ContentError::Validation(
            "Published posts require a description and content".to_string(),
        ));
    }

    let gallery_images = payload
        .gallery_images
        .map(|input| input.normalize())
        .filter(|images| !images.is_empty());

    Ok(Post {
        slug,
        title,
        description,
        date: trimmed(payload.date).unwrap_or_else(today),
        content,
        hero_image: trimmed(payload.hero_image),
        video_url: trimmed(payload.video_url),
        gallery_images,
        status,
        source: PostSource::Custom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::content::GalleryInput;

    fn payload(title: &str) -> PostPayload {
        PostPayload {
            title: Some(title.to_string()),
            description: Some("d".to_string()),
            content: Some("c".to_string()),
            ..PostPayload::default()
        }
    }

    #[test]
    fn test_title_required() {
        let err = normalize(PostPayload::default()).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));

        let err = normalize(payload("   ")).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn test_slug_from_title_or_explicit() {
        assert_eq!(normalize(payload("Hello World")).unwrap().slug, "hello-world");

        let mut explicit = payload("Hello World");
        explicit.slug = Some("Custom Slug".to_string());
        assert_eq!(normalize(explicit).unwrap().slug, "custom-slug");

        let mut blank = payload("Hello World");
        blank.slug = Some("  ".to_string());
        assert_eq!(normalize(blank).unwrap().slug, "hello-world");
    }

    #[test]
    fn test_empty_slug_rejected() {
        let err = normalize(payload("!!!")).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn test_published_requires_description_and_content() {
        let mut missing = payload("Title");
        missing.content = Some("  ".to_string());
        assert!(matches!(normalize(missing).unwrap_err(), ContentError::Validation(_)));

        let mut draft = payload("Title");
        draft.description = None;
        draft.content = None;
        draft.status = Some(PostStatus::Draft);
        let post = normalize(draft).unwrap();
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_defaults_and_optional_fields() {
        let mut input = payload("Title");
        input.hero_image = Some("  ".to_string());
        input.video_url = Some(" https://video.example/v ".to_string());
        input.gallery_images = Some(GalleryInput::Text("a.png\n\nb.png".to_string()));

        let post = normalize(input).unwrap();
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.date, today());
        assert_eq!(post.hero_image, None);
        assert_eq!(post.video_url.as_deref(), Some("https://video.example/v"));
        assert_eq!(post.gallery_images, Some(vec!["a.png".to_string(), "b.png".to_string()]));
        assert_eq!(post.source, PostSource::Custom);
    }

    #[test]
    fn test_empty_gallery_becomes_none() {
        let mut input = payload("Title");
        input.gallery_images = Some(GalleryInput::List(vec![" ".to_string()]));
        assert_eq!(normalize(input).unwrap().gallery_images, None);
    }
}

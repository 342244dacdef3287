use folio_domain::preview::{LinkPreview, PreviewStatus};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property], meta[name]").expect("meta selector"));

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel]").expect("link selector"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// 从 `<head>` 中提取的元数据
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadMetadata {
    /// 小写的 property/name → content，后出现的覆盖先出现的
    pub meta: HashMap<String, String>,
    /// 小写的 rel → 按出现顺序排列的 href
    pub links: HashMap<String, Vec<String>>,
    pub title: Option<String>,
}

impl HeadMetadata {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut head = Self::default();

        // 属性值由解析器解码实体
        for element in document.select(&META_SELECTOR) {
            let attrs = element.value();
            let key = attrs.attr("property").or_else(|| attrs.attr("name"));
            if let (Some(key), Some(content)) = (key, attrs.attr("content")) {
                head.meta.insert(key.to_ascii_lowercase(), content.to_string());
            }
        }

        for element in document.select(&LINK_SELECTOR) {
            let attrs = element.value();
            if let (Some(rel), Some(href)) = (attrs.attr("rel"), attrs.attr("href")) {
                let rel = collapse_whitespace(rel).to_ascii_lowercase();
                head.links.entry(rel).or_default().push(href.to_string());
            }
        }

        head.title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|title| title.text().collect::<String>());

        head
    }

    fn meta_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.meta.get(*key))
            .find_map(|value| non_empty(value))
    }

    fn first_link(&self, rels: &[&str]) -> Option<&str> {
        rels.iter()
            .filter_map(|rel| self.links.get(*rel))
            .flat_map(|hrefs| hrefs.iter())
            .map(|href| href.trim())
            .find(|href| !href.is_empty())
    }

    /// 按优先级组合出预览记录，相对地址按页面URL解析为绝对地址
    pub fn compose(&self, page_url: &Url) -> LinkPreview {
        let title = self
            .meta_text(&["og:title", "twitter:title"])
            .or_else(|| self.title.as_deref().and_then(non_empty));
        let description = self.meta_text(&["og:description", "description", "twitter:description"]);
        let image = self
            .meta_text(&["og:image", "twitter:image"])
            .and_then(|src| absolutize(page_url, &src));
        let site_name = self
            .meta_text(&["og:site_name"])
            .or_else(|| page_url.host_str().map(str::to_string));
        let favicon = self
            .first_link(&["icon", "shortcut icon", "apple-touch-icon"])
            .and_then(|href| absolutize(page_url, href));

        LinkPreview {
            url: page_url.to_string(),
            title,
            description,
            image,
            site_name,
            favicon,
            status: PreviewStatus::Ok,
            error: None,
        }
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

fn non_empty(text: &str) -> Option<String> {
    let text = collapse_whitespace(text);
    (!text.is_empty()).then_some(text)
}

fn absolutize(base: &Url, href: &str) -> Option<String> {
    let resolved = base.join(href.trim()).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

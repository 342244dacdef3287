/// 把任意文本转换为URL安全的slug
///
/// 小写化，丢弃 `[a-z0-9\s-]` 以外的字符，空白折叠成单个连字符，
/// 连续连字符折叠为一个，并去掉首尾连字符。
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

// src/ingest/mod.rs
pub mod providers;
pub mod types;

/// Normalize a feed snippet: decode HTML entities, strip tags, collapse
/// whitespace. The AWS feed embeds markup inside `<description>`.
pub fn normalize_snippet(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    // 3) Collapse whitespace
    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_tags_and_entities() {
        let s = "<p>Amazon&nbsp;S3 now supports   <b>faster</b> listing</p>";
        assert_eq!(normalize_snippet(s), "Amazon S3 now supports faster listing");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_snippet("  a \n\t b  "), "a b");
    }

    #[test]
    fn normalize_keeps_plain_text_unchanged() {
        assert_eq!(normalize_snippet("plain text"), "plain text");
    }
}

//! Regex-based helpers for pulling tags and attributes out of article HTML.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("valid script regex")
});
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|[\s<])([a-z][a-z0-9_:.-]*)\s*=\s*["']([^"']*)["']"#)
        .expect("valid attr regex")
});

/// A `<script>` element split into its opening-tag attributes and its text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScriptBlock<'a> {
    pub(crate) attrs: &'a str,
    pub(crate) text: &'a str,
}

pub(crate) fn script_blocks(html: &str) -> impl Iterator<Item = ScriptBlock<'_>> {
    SCRIPT_RE.captures_iter(html).map(|cap| ScriptBlock {
        attrs: cap.get(1).map_or("", |m| m.as_str()),
        text: cap.get(2).map_or("", |m| m.as_str()),
    })
}

/// Returns the text of the first `<script>` whose `id` equals `id`.
pub(crate) fn find_script_by_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    script_blocks(html)
        .find(|block| extract_attr(block.attrs, "id").is_some_and(|v| v == id))
        .map(|block| block.text)
}

/// Returns the trimmed text of every `application/ld+json` script.
pub(crate) fn json_ld_blocks(html: &str) -> impl Iterator<Item = &str> {
    script_blocks(html)
        .filter(|block| {
            extract_attr(block.attrs, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("application/ld+json"))
        })
        .map(|block| block.text.trim())
        .filter(|text| !text.is_empty())
}

/// Finds `<meta {key_attr}="{key_value}" content="...">` and returns `content`.
pub(crate) fn find_meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, "content")
        } else {
            None
        }
    })
}

/// Returns the trimmed value of `attr` in a tag or attribute list.
/// Attribute names match case-insensitively; `data-id` never matches `id`.
pub(crate) fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    ATTR_RE.captures_iter(tag).find_map(|cap| {
        let name = cap.get(1)?;
        if name.as_str().eq_ignore_ascii_case(attr) {
            cap.get(2).map(|m| m.as_str().trim().to_string())
        } else {
            None
        }
    })
}

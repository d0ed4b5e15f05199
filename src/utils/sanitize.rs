// Sanitization utilities
use regex::Regex;
use std::sync::OnceLock;

static TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Reduce provider-supplied HTML (Spoonacular summaries) to plain text:
/// remove tags, then decode the entities that survive.
pub fn strip_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("static pattern"));
    let stripped = tag_re.replace_all(text, "");
    decode_entities(&stripped).trim().to_string()
}

/// Decode the named entities the recipe APIs actually emit. `&amp;` must go
/// last so `&amp;lt;` does not double-decode.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

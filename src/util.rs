use crate::constants;

pub struct Util;

impl Util {
    /// Case-insensitive check against the known scheme/host prefixes.
    pub fn is_url_like(value: &str) -> bool {
        let value = value.to_lowercase();
        constants::URL_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
    }

    /// Remove `http(s)://` and `www.` runs from text, then collapse the
    /// whitespace left behind.
    pub fn strip_urls(text: &str) -> String {
        let text = constants::HTTP_URL.replace_all(text, "");
        let text = constants::WWW_URL.replace_all(&text, "");
        constants::WHITESPACE
            .replace_all(&text, " ")
            .trim()
            .to_owned()
    }

    /// Escape text content so it re-tokenizes unchanged. Quotes stay as they are.
    pub fn escape_text(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape a value written inside double quotes.
    pub fn escape_attribute(value: &str) -> String {
        value.replace('&', "&amp;").replace('"', "&quot;")
    }

    pub fn is_whitespace(text: &str) -> bool {
        text.chars().all(char::is_whitespace)
    }

    pub fn has_passthrough_prefix(attr: &str) -> bool {
        constants::PASSTHROUGH_ATTRIBUTE_PREFIXES
            .iter()
            .any(|prefix| attr.starts_with(prefix))
    }
}

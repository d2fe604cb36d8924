use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub const INDENT_UNIT: &str = "  ";

/// Tags whose text content is dropped until the matching end tag.
pub static SKIP_CONTENT_TAGS: Lazy<HashSet<&str>> = Lazy::new(|| {
    HashSet::from(["script", "style", "meta", "link", "noscript", "base"])
});

/// Tags that never open a nesting level when pretty printing.
pub static SELF_CLOSING_TAGS: Lazy<HashSet<&str>> =
    Lazy::new(|| HashSet::from(["br", "hr", "img", "input", "link", "meta"]));

pub static INLINE_TAGS: Lazy<HashSet<&str>> = Lazy::new(|| {
    HashSet::from([
        "a", "span", "b", "strong", "i", "em", "u", "sub", "sup", "button", "label", "img",
        "code", "small",
    ])
});

pub const ATTRIBUTES_TO_KEEP: &[&str] = &[
    "id",
    "class",
    "href",
    "src",
    "alt",
    "title",
    "name",
    "value",
    "type",
    "placeholder",
    "role",
    "for",
    "rel",
    "target",
];

pub static URL_ATTRIBUTES: Lazy<HashSet<&str>> = Lazy::new(|| {
    HashSet::from([
        "href",
        "src",
        "action",
        "data",
        "poster",
        "srcset",
        "cite",
        "formaction",
        "icon",
        "manifest",
        "archive",
        "background",
        "codebase",
        "classid",
        "longdesc",
        "profile",
        "usemap",
    ])
});

pub const URL_PREFIXES: &[&str] = &["http://", "https://", "ftp://", "mailto:", "//", "www."];

pub const PASSTHROUGH_ATTRIBUTE_PREFIXES: &[&str] = &["data-", "aria-"];

pub static HTTP_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("HTTP_URL regex")
});
pub static WWW_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"www\.[^\s<>"{}|\\^`\[\]]+"#).expect("WWW_URL regex"));
pub static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s+"#).expect("WHITESPACE regex"));

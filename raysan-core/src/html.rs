// raysan-core/src/html.rs
//! Regex-based HTML scrubbing.
//!
//! [`sanitize_html`] is a text-substitution pass, not a parser. Malformed or
//! deliberately crafted markup (unbalanced quotes, `>` inside attribute values,
//! comments, entities that decode to markup) can slip through it. Treat the
//! output as best-effort cleanup; it is not a security boundary, and untrusted
//! HTML that will be rendered needs a real HTML sanitizer.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::sanitizers::builtin::strip_script_blocks;

/// Inline event-handler attributes that are always removed.
pub const EVENT_HANDLER_ATTRIBUTES: &[&str] = &[
    "onabort", "onblur", "onchange", "onclick", "ondblclick", "onerror", "onfocus", "oninput",
    "onkeydown", "onkeypress", "onkeyup", "onload", "onmousedown", "onmousemove", "onmouseout",
    "onmouseover", "onmouseup", "onreset", "onresize", "onscroll", "onselect", "onsubmit",
    "onunload",
];

static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"(?i)\s+(?:{})\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#,
        EVENT_HANDLER_ATTRIBUTES.join("|")
    );
    Regex::new(&pattern).expect("event handler pattern is valid")
});

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)([^>]*)>").expect("tag pattern is valid"));

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=/"'<>]+)(\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+))?"#).expect("attribute pattern is valid")
});

fn contains_ignore_case(list: &[&str], name: &str) -> bool {
    list.iter().any(|allowed| allowed.eq_ignore_ascii_case(name))
}

/// Strips script blocks and inline event handlers from `html`.
///
/// With `allowed_tags`, any other tag is removed (its text content is kept).
/// With `allowed_attributes`, any other attribute is removed from the tags
/// that remain.
pub fn sanitize_html(html: &str, allowed_tags: Option<&[&str]>, allowed_attributes: Option<&[&str]>) -> String {
    let without_scripts = strip_script_blocks(html);
    let without_handlers = EVENT_HANDLER.replace_all(&without_scripts, "");

    if allowed_tags.is_none() && allowed_attributes.is_none() {
        return without_handlers.into_owned();
    }

    TAG.replace_all(&without_handlers, |caps: &Captures| {
        let closing = &caps[1];
        let name = &caps[2];
        if let Some(tags) = allowed_tags {
            if !contains_ignore_case(tags, name) {
                debug!("sanitize_html: dropping disallowed tag <{}{}>", closing, name);
                return String::new();
            }
        }
        match allowed_attributes {
            Some(attributes) => rebuild_tag(closing, name, &caps[3], attributes),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

fn rebuild_tag(closing: &str, name: &str, attrs: &str, allowed: &[&str]) -> String {
    let mut tag = format!("<{}{}", closing, name);
    for attr in ATTRIBUTE.captures_iter(attrs) {
        if contains_ignore_case(allowed, &attr[1]) {
            tag.push(' ');
            tag.push_str(&attr[0]);
        }
    }
    if attrs.trim_end().ends_with('/') {
        tag.push_str(" /");
    }
    tag.push('>');
    tag
}

// src/format/html.rs
//! Markup normalizer — turns formatted export text into an HTML
//! fragment for the rich half of the clipboard payload.
//!
//! A best-effort textual transform, not a markup parser: line-oriented
//! list wrapping first, inline elements second, then explicit line
//! breaks. Malformed or overlapping markup produces odd but harmless
//! output; nothing here can fail.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^•\s+(.*)$").unwrap());
static DASH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^-\s+(.*)$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<li>.*?</li>").unwrap());
static ADJACENT_LISTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"</ul>\s*<ul>").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~([^~]+)~").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static PIPE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(https?://[^|>]+)\|([^>]+)>").unwrap());

/// Converts formatted export text into an HTML fragment carrying the
/// same content: bullet runs as lists, inline emphasis as elements,
/// newlines as line breaks.
pub fn to_html_fragment(text: &str) -> String {
    // Bulleted and dashed lines become list items, then contiguous
    // item runs collapse into a single list container.
    let html = BULLET_LINE.replace_all(text, "<li>${1}</li>");
    let html = DASH_LINE.replace_all(&html, "<li>${1}</li>");
    let html = LIST_ITEM.replace_all(&html, "<ul>${0}</ul>");
    let html = ADJACENT_LISTS.replace_all(&html, "");

    let html = BOLD.replace_all(&html, "<b>${1}</b>");
    let html = ITALIC.replace_all(&html, "<i>${1}</i>");
    let html = STRIKE.replace_all(&html, "<s>${1}</s>");
    let html = CODE.replace_all(&html, "<code>${1}</code>");
    let html = PIPE_LINK.replace_all(&html, r#"<a href="${1}">${2}</a>"#);

    html.replace('\n', "<br>")
}

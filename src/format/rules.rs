// src/format/rules.rs
//! Rewrite rules shared across the format engines.
//!
//! These are targeted substring rewrites over the outline's lightweight
//! markup, not a Markdown parser. Rule order in the callers matters:
//! later rules must not re-match text produced by earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());
static TODO_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"TODO\s").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());

/// Cross-references `[[text]]` become bare text. Idempotent: plain text
/// is never stripped twice.
pub fn strip_page_refs(content: &str) -> String {
    PAGE_REF.replace_all(content, "${1}").into_owned()
}

/// Task markers `TODO ` become a checkbox glyph.
pub fn todo_to_checkbox(content: &str, glyph: &str) -> String {
    TODO_MARKER
        .replace_all(content, format!("{} ", glyph).as_str())
        .into_owned()
}

/// Narrows `**bold**`, `__italic__` and `~~strike~~` to the
/// single-delimiter convention the chat targets use.
pub fn narrow_emphasis(content: &str) -> String {
    let content = BOLD.replace_all(content, "*${1}*");
    let content = ITALIC.replace_all(&content, "_${1}_");
    STRIKE.replace_all(&content, "~${1}~").into_owned()
}

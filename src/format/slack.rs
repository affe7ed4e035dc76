// src/format/slack.rs
//! Slack-format engine.
//!
//! Four-space indent unit, flush lines for the top two levels, dash
//! bullets below, and Slack's `<url|text>` link form. Bare URLs get
//! angle-bracket wrapped so Slack unfurls them as links.

use super::engine::{BulletRule, FormatStyle};
use super::rules;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

pub(super) static STYLE: FormatStyle = FormatStyle {
    indent_unit: "    ",
    bullet: BulletRule::DashFromSecondLevel,
    rich_clipboard: true,
    rewrite,
};

const CHECKBOX: &str = "☐";

static MD_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static PIPED_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s<>|]+\|\w+").unwrap());
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

fn rewrite(content: &str) -> String {
    let content = rules::strip_page_refs(content);
    let content = rules::todo_to_checkbox(&content, CHECKBOX);
    let content = rules::narrow_emphasis(&content);

    // Link order matters: enclose stray url|text pairs, convert
    // markdown links, then wrap whatever bare URLs remain. Each later
    // step skips the angle-bracketed output of the earlier ones.
    let content = enclose_piped_urls(&content);
    let content = MD_LINK.replace_all(&content, "<${2}|${1}>").into_owned();
    wrap_bare_urls(&content)
}

/// Adds angle brackets around `url|text` pairs typed without them.
fn enclose_piped_urls(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for m in PIPED_URL.find_iter(content) {
        out.push_str(&content[last..m.start()]);
        let preceding = content[..m.start()].chars().next_back();
        if matches!(preceding, Some('<') | Some('"')) {
            out.push_str(m.as_str());
        } else {
            out.push('<');
            out.push_str(m.as_str());
            out.push('>');
        }
        last = m.end();
    }

    out.push_str(&content[last..]);
    out
}

/// Wraps bare URLs in angle brackets, leaving already-linked ones alone.
fn wrap_bare_urls(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for m in BARE_URL.find_iter(content) {
        out.push_str(&content[last..m.start()]);
        let preceding = content[..m.start()].chars().next_back();
        let already_linked = matches!(preceding, Some('<') | Some('|') | Some('"'));
        if already_linked || Url::parse(m.as_str()).is_err() {
            out.push_str(m.as_str());
        } else {
            out.push('<');
            out.push_str(m.as_str());
            out.push('>');
        }
        last = m.end();
    }

    out.push_str(&content[last..]);
    out
}

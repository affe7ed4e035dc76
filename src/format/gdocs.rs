// src/format/gdocs.rs
//! Google Docs-format engine.
//!
//! Two-space indent, a bullet glyph at every level. Emphasis and link
//! markup are left as-is — Docs re-renders standard markdown on paste —
//! so only the outline's own syntax (cross-references, task markers)
//! is rewritten.

use super::engine::{BulletRule, FormatStyle};
use super::rules;

pub(super) static STYLE: FormatStyle = FormatStyle {
    indent_unit: "  ",
    bullet: BulletRule::BulletEveryLevel,
    rich_clipboard: true,
    rewrite,
};

const CHECKBOX: &str = "□";

fn rewrite(content: &str) -> String {
    let content = rules::strip_page_refs(content);
    rules::todo_to_checkbox(&content, CHECKBOX)
}

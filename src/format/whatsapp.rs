// src/format/whatsapp.rs
//! WhatsApp-format engine.
//!
//! Two-space indent, a bullet glyph at every level, single-delimiter
//! emphasis. URLs stay bare — WhatsApp shows them plainly.

use super::engine::{BulletRule, FormatStyle};
use super::rules;

pub(super) static STYLE: FormatStyle = FormatStyle {
    indent_unit: "  ",
    bullet: BulletRule::BulletEveryLevel,
    rich_clipboard: false,
    rewrite,
};

const CHECKBOX: &str = "□";

fn rewrite(content: &str) -> String {
    let content = rules::strip_page_refs(content);
    let content = rules::todo_to_checkbox(&content, CHECKBOX);
    rules::narrow_emphasis(&content)
}

#[cfg(test)]
mod tests {
    use super::super::engine::render_tree;
    use super::*;
    use crate::model::Block;
    use pretty_assertions::assert_eq;

    fn render(tree: &Block) -> String {
        render_tree(tree, &STYLE)
    }

    #[test]
    fn checkbox_ref_and_bold_with_bullet_prefix() {
        let tree = Block::leaf("TODO [[Task]] **go**");
        assert_eq!(render(&tree), "• □ Task *go*\n");
    }

    #[test]
    fn every_level_gets_a_bullet_and_two_space_indent() {
        let tree = Block::new(
            "a",
            vec![Block::new("b", vec![Block::leaf("c")])],
        );
        assert_eq!(render(&tree), "• a\n  • b\n    • c\n");
    }

    #[test]
    fn urls_stay_bare() {
        let tree = Block::leaf("read https://example.com/page");
        assert_eq!(render(&tree), "• read https://example.com/page\n");
    }

    #[test]
    fn horizontal_rule_has_no_bullet() {
        let tree = Block::new("a", vec![Block::leaf("---")]);
        assert_eq!(render(&tree), "• a\n  ---\n");
    }
}

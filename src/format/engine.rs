// src/format/engine.rs
//! The shared recursive rendering engine.

use crate::model::Block;

/// Per-target configuration consumed by [`render_tree`].
pub struct FormatStyle {
    /// Indent string repeated once per nesting level.
    pub indent_unit: &'static str,
    /// How a rendered line is prefixed at each level.
    pub bullet: BulletRule,
    /// Whether this target's clipboard payload carries an HTML rendering.
    pub rich_clipboard: bool,
    /// Target-specific markup rewriting applied to non-trivial content.
    pub rewrite: fn(&str) -> String,
}

/// Bullet and indent policy for rendered lines.
pub enum BulletRule {
    /// Flush lines at levels 0 and 1, a dash bullet with indent from
    /// level 2 onward.
    DashFromSecondLevel,
    /// A bullet glyph at every level, indent per level.
    BulletEveryLevel,
}

/// Renders a block tree into the target's text form.
///
/// Pure and deterministic. Every rendered line ends with a newline, so
/// concatenation of sibling and child output needs no extra separators.
pub fn render_tree(block: &Block, style: &FormatStyle) -> String {
    let mut out = String::new();
    render_into(block, 0, style, &mut out);
    out
}

fn render_into(block: &Block, level: usize, style: &FormatStyle, out: &mut String) {
    let content = block.content.trim();

    // Empty content emits nothing but never suppresses its subtree.
    if !content.is_empty() {
        let indent = style.indent_unit.repeat(level);

        if content == "---" {
            // Horizontal rule: indented marker line, no markup rewriting.
            out.push_str(&indent);
            out.push_str("---\n");
        } else {
            let line = (style.rewrite)(content);
            match style.bullet {
                BulletRule::DashFromSecondLevel if level < 2 => {
                    out.push_str(line.trim_start());
                    out.push('\n');
                }
                BulletRule::DashFromSecondLevel => {
                    out.push_str(&indent);
                    out.push_str("- ");
                    out.push_str(&line);
                    out.push('\n');
                }
                BulletRule::BulletEveryLevel => {
                    out.push_str(&indent);
                    out.push_str("• ");
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }

    for child in &block.children {
        render_into(child, level + 1, style, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough(content: &str) -> String {
        content.to_string()
    }

    const PLAIN: FormatStyle = FormatStyle {
        indent_unit: "  ",
        bullet: BulletRule::BulletEveryLevel,
        rich_clipboard: false,
        rewrite: passthrough,
    };

    #[test]
    fn empty_parent_does_not_suppress_its_subtree() {
        let tree = Block::new("   ", vec![Block::leaf("child")]);
        assert_eq!(render_tree(&tree, &PLAIN), "  • child\n");
    }

    #[test]
    fn horizontal_rule_keeps_children() {
        let tree = Block::new(" --- ", vec![Block::leaf("after")]);
        assert_eq!(render_tree(&tree, &PLAIN), "---\n  • after\n");
    }

    #[test]
    fn indent_grows_one_unit_per_level() {
        let tree = Block::new(
            "a",
            vec![Block::new("b", vec![Block::new("c", vec![Block::leaf("d")])])],
        );
        let rendered = render_tree(&tree, &PLAIN);
        for (level, line) in rendered.lines().enumerate() {
            let expected_indent = "  ".repeat(level);
            assert!(line.starts_with(&format!("{}• ", expected_indent)));
        }
    }
}

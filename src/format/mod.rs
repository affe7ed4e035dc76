// src/format/mod.rs
//! Format engines — pure conversion of a block tree into one
//! target-specific string.
//!
//! Each target is a variant of the closed [`ExportFormat`] set and is
//! described by a small [`FormatStyle`] record (indent unit, bullet
//! rule, rewrite function) consumed by one shared recursive engine, so
//! the traversal control flow exists exactly once.

mod engine;
mod gdocs;
pub mod html;
mod rules;
mod slack;
mod whatsapp;

pub use engine::{render_tree, BulletRule, FormatStyle};

use crate::model::Block;
use clap::ValueEnum;

/// The closed set of supported export targets.
///
/// New targets are added here together with a style record; consumers
/// dispatch through [`ExportFormat::render`] and never grow their own
/// per-target branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Slack,
    #[value(name = "whatsapp")]
    WhatsApp,
    GoogleDocs,
    /// Generic rich-text target; reuses the Slack engine.
    RichText,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Slack,
        ExportFormat::WhatsApp,
        ExportFormat::GoogleDocs,
        ExportFormat::RichText,
    ];

    /// Human-readable label used in notifications and the command surface.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Slack => "Slack",
            ExportFormat::WhatsApp => "WhatsApp",
            ExportFormat::GoogleDocs => "Google Docs",
            ExportFormat::RichText => "RichText",
        }
    }

    /// Renders a block tree into this target's text form.
    pub fn render(&self, block: &Block) -> String {
        engine::render_tree(block, self.style())
    }

    /// Whether the clipboard payload for this target also carries an
    /// HTML rendering of the same content.
    pub fn wants_html(&self) -> bool {
        self.style().rich_clipboard
    }

    fn style(&self) -> &'static FormatStyle {
        match self {
            ExportFormat::Slack | ExportFormat::RichText => &slack::STYLE,
            ExportFormat::WhatsApp => &whatsapp::STYLE,
            ExportFormat::GoogleDocs => &gdocs::STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_command_surface() {
        let names: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["Slack", "WhatsApp", "Google Docs", "RichText"]);
    }

    #[test]
    fn rich_text_is_an_alias_for_the_slack_engine() {
        let tree = Block::new(
            "TODO [[Task]] **go**",
            vec![Block::leaf("see [docs](https://example.com)")],
        );
        assert_eq!(
            ExportFormat::RichText.render(&tree),
            ExportFormat::Slack.render(&tree)
        );
        assert_eq!(
            ExportFormat::RichText.wants_html(),
            ExportFormat::Slack.wants_html()
        );
    }

    #[test]
    fn html_payloads_for_rich_targets_only() {
        assert!(ExportFormat::Slack.wants_html());
        assert!(ExportFormat::GoogleDocs.wants_html());
        assert!(!ExportFormat::WhatsApp.wants_html());
    }

    #[test]
    fn rendering_is_deterministic_for_every_target() {
        let tree = Block::new(
            "TODO [[Plan]] **now**",
            vec![
                Block::leaf("---"),
                Block::new("nested _deep_", vec![Block::leaf("leaf ~~old~~")]),
            ],
        );
        for format in ExportFormat::ALL {
            assert_eq!(format.render(&tree), format.render(&tree));
        }
    }
}

// src/output/clipboard.rs
//! Clipboard writing with layered fallback strategies.
//!
//! Strategies are tried in order: the cross-platform arboard write
//! first, then the platform paste commands. The first success wins;
//! the last failure propagates when every strategy fails.

use crate::error::AppError;
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
use std::io::Write;
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
use std::process::{Child, Command, Stdio};

/// The plain-text/HTML pair written to the clipboard for one export.
///
/// When `html` is present it renders the same content as `text` —
/// same ordering, same hierarchy — never independent content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub text: String,
    pub html: Option<String>,
}

impl ClipboardPayload {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: None,
        }
    }

    pub fn with_html(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: Some(html.into()),
        }
    }
}

/// One way of placing a payload on the system clipboard.
pub trait ClipboardStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn write(&self, payload: &ClipboardPayload) -> Result<(), AppError>;
}

/// Writes the payload to the system clipboard.
pub fn write_clipboard(payload: &ClipboardPayload) -> Result<(), AppError> {
    log::debug!(
        "Copying {} characters to clipboard (html: {})",
        payload.text.len(),
        payload.html.is_some()
    );
    write_with_strategies(&platform_strategies(), payload)
}

/// Tries each strategy in order; stops at the first success and
/// propagates the last failure when all fail.
pub fn write_with_strategies(
    strategies: &[Box<dyn ClipboardStrategy>],
    payload: &ClipboardPayload,
) -> Result<(), AppError> {
    let mut last_failure = None;

    for strategy in strategies {
        match strategy.write(payload) {
            Ok(()) => {
                log::info!("Content copied to clipboard using {}", strategy.name());
                return Ok(());
            }
            Err(e) => {
                log::debug!("Clipboard strategy {} failed: {}", strategy.name(), e);
                last_failure = Some(e);
            }
        }
    }

    Err(last_failure.unwrap_or_else(|| {
        AppError::Clipboard("no clipboard strategy available on this platform".to_string())
    }))
}

/// The strategy order for the current platform.
fn platform_strategies() -> Vec<Box<dyn ClipboardStrategy>> {
    #[allow(unused_mut)]
    let mut strategies: Vec<Box<dyn ClipboardStrategy>> = vec![Box::new(ArboardStrategy)];

    #[cfg(target_os = "linux")]
    {
        strategies.push(Box::new(PasteCommand::WL_COPY));
        strategies.push(Box::new(PasteCommand::XCLIP));
    }
    #[cfg(target_os = "macos")]
    strategies.push(Box::new(PasteCommand::PBCOPY));
    #[cfg(target_os = "windows")]
    strategies.push(Box::new(PasteCommand::CLIP_EXE));

    strategies
}

/// Primary strategy: the arboard crate, which writes the text/html and
/// text/plain representations in one atomic clipboard transaction.
struct ArboardStrategy;

impl ClipboardStrategy for ArboardStrategy {
    fn name(&self) -> &'static str {
        "arboard"
    }

    fn write(&self, payload: &ClipboardPayload) -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

        match &payload.html {
            Some(html) => clipboard
                .set_html(html, Some(&payload.text))
                .map_err(|e| AppError::Clipboard(format!("Failed to set clipboard html: {}", e)))?,
            None => clipboard
                .set_text(&payload.text)
                .map_err(|e| AppError::Clipboard(format!("Failed to set clipboard text: {}", e)))?,
        }

        Ok(())
    }
}

/// Fallback strategy: an external paste command fed through stdin.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
struct PasteCommand {
    program: &'static str,
    plain_args: &'static [&'static str],
    /// Args selecting an HTML target type, for commands that support one.
    html_args: Option<&'static [&'static str]>,
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
impl PasteCommand {
    #[cfg(target_os = "linux")]
    const WL_COPY: PasteCommand = PasteCommand {
        program: "wl-copy",
        plain_args: &[],
        html_args: Some(&["--type", "text/html"]),
    };

    #[cfg(target_os = "linux")]
    const XCLIP: PasteCommand = PasteCommand {
        program: "xclip",
        plain_args: &["-selection", "clipboard"],
        html_args: Some(&["-selection", "clipboard", "-t", "text/html"]),
    };

    #[cfg(target_os = "macos")]
    const PBCOPY: PasteCommand = PasteCommand {
        program: "pbcopy",
        plain_args: &[],
        html_args: None,
    };

    #[cfg(target_os = "windows")]
    const CLIP_EXE: PasteCommand = PasteCommand {
        program: "clip",
        plain_args: &[],
        html_args: None,
    };
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
impl ClipboardStrategy for PasteCommand {
    fn name(&self) -> &'static str {
        self.program
    }

    fn write(&self, payload: &ClipboardPayload) -> Result<(), AppError> {
        // Commands that understand an HTML target get the rich
        // rendering; everything else degrades to the plain text.
        let (args, body) = match (&payload.html, self.html_args) {
            (Some(html), Some(args)) => (args, html.as_str()),
            _ => (self.plain_args, payload.text.as_str()),
        };
        pipe_to_command(self.program, args, body)
    }
}

/// Spawns `program`, feeds `body` through its stdin, and waits.
///
/// The child is reaped on every exit path; a failed stdin write kills
/// it before returning.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn pipe_to_command(program: &str, args: &[&str], body: &str) -> Result<(), AppError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(body.as_bytes()) {
            reap(&mut child);
            return Err(AppError::Clipboard(format!(
                "Failed to write to {}: {}",
                program, e
            )));
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(AppError::Clipboard(format!(
            "{} failed: {}",
            program,
            stderr.trim()
        )))
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

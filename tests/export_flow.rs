// tests/export_flow.rs
//! End-to-end export tests driving the Exporter against in-memory
//! host and delivery doubles.

use outline2clip::{
    AppError, BlockId, BlockSource, ClipboardPayload, ExportFormat, Exporter, HostBlock, Notifier,
    PayloadSink,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory block source backed by a map of raw host blocks.
struct MemorySource {
    blocks: HashMap<String, HostBlock>,
}

impl MemorySource {
    fn new() -> Self {
        Self {
            blocks: HashMap::new(),
        }
    }

    fn with_block(mut self, id: &str, content: &str, children: Vec<serde_json::Value>) -> Self {
        self.blocks.insert(
            id.to_string(),
            serde_json::from_value(json!({ "content": content, "children": children })).unwrap(),
        );
        self
    }
}

#[async_trait::async_trait]
impl BlockSource for MemorySource {
    async fn block(&self, id: &BlockId) -> Result<Option<HostBlock>, AppError> {
        Ok(self.blocks.get(id.as_str()).cloned())
    }
}

/// Records every notification shown to the user.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Records delivered payloads; optionally fails every delivery.
struct RecordingSink {
    payloads: Mutex<Vec<ClipboardPayload>>,
    fail: bool,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl PayloadSink for RecordingSink {
    fn deliver(&self, payload: &ClipboardPayload) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Clipboard("scripted delivery failure".to_string()));
        }
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

fn sample_source() -> MemorySource {
    MemorySource::new()
        .with_block("root", "TODO [[Task]] **go**", vec![json!("child")])
        .with_block("child", "see [docs](https://example.com)", vec![])
}

fn exporter(
    source: MemorySource,
    format: ExportFormat,
) -> (Exporter, Arc<RecordingNotifier>, Arc<RecordingSink>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let sink = Arc::new(RecordingSink::new());
    let exporter = Exporter::new(
        Arc::new(source),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&sink) as Arc<dyn PayloadSink>,
        format,
        100,
    );
    (exporter, notifier, sink)
}

fn id(s: &str) -> BlockId {
    BlockId::parse(s).unwrap()
}

#[tokio::test]
async fn slack_export_delivers_dual_representation_and_notifies_once() {
    let (exporter, notifier, sink) = exporter(sample_source(), ExportFormat::Slack);

    exporter.export_block(&id("root")).await.unwrap();

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0].text,
        "☐ Task *go*\nsee <https://example.com|docs>\n"
    );
    let html = payloads[0].html.as_ref().expect("slack payload carries html");
    assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));

    let messages = notifier.messages.lock().unwrap();
    assert_eq!(*messages, vec!["Block exported to Slack format!"]);
}

#[tokio::test]
async fn whatsapp_export_is_plain_text_only() {
    let (exporter, _notifier, sink) = exporter(sample_source(), ExportFormat::WhatsApp);

    exporter.export_block(&id("root")).await.unwrap();

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0].text,
        "• □ Task *go*\n  • see [docs](https://example.com)\n"
    );
    assert!(payloads[0].html.is_none());
}

#[tokio::test]
async fn google_docs_export_carries_an_html_list() {
    let source = MemorySource::new()
        .with_block("root", "A", vec![json!("b")])
        .with_block("b", "B", vec![]);
    let (exporter, _notifier, sink) = exporter(source, ExportFormat::GoogleDocs);

    exporter.export_block(&id("root")).await.unwrap();

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads[0].text, "• A\n  • B\n");
    let html = payloads[0].html.as_ref().expect("docs payload carries html");
    assert!(html.starts_with("<ul><li>A</li>"));
}

#[tokio::test]
async fn not_found_root_never_reaches_the_sink() {
    for format in ExportFormat::ALL {
        let (exporter, notifier, sink) = exporter(MemorySource::new(), format);

        let result = exporter.export_block(&id("missing")).await;

        assert!(matches!(result, Err(AppError::BlockNotFound(_))));
        assert!(sink.payloads.lock().unwrap().is_empty());

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(
            *messages,
            vec![format!(
                "Error exporting block to {} format",
                format.display_name()
            )]
        );
    }
}

#[tokio::test]
async fn delivery_failure_is_notified_and_reraised() {
    let notifier = Arc::new(RecordingNotifier::default());
    let sink = Arc::new(RecordingSink::failing());
    let exporter = Exporter::new(
        Arc::new(sample_source()),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        sink as Arc<dyn PayloadSink>,
        ExportFormat::Slack,
        100,
    );

    let result = exporter.export_block(&id("root")).await;

    assert!(matches!(result, Err(AppError::Clipboard(_))));
    let messages = notifier.messages.lock().unwrap();
    assert_eq!(*messages, vec!["Error exporting block to Slack format"]);
}

#[tokio::test]
async fn malformed_sibling_references_do_not_break_the_export() {
    let source = MemorySource::new()
        .with_block(
            "root",
            "Root",
            vec![json!("ok"), json!(true), json!({ "name": "no id" })],
        )
        .with_block("ok", "Ok", vec![]);
    let (exporter, _notifier, sink) = exporter(source, ExportFormat::WhatsApp);

    exporter.export_block(&id("root")).await.unwrap();

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads[0].text, "• Root\n  • Ok\n");
}

#[tokio::test]
async fn indent_width_tracks_depth_for_each_target() {
    let source = MemorySource::new()
        .with_block("d0", "zero", vec![json!("d1")])
        .with_block("d1", "one", vec![json!("d2")])
        .with_block("d2", "two", vec![json!("d3")])
        .with_block("d3", "three", vec![]);

    // Bullet targets: two spaces per level in front of the glyph.
    for format in [ExportFormat::WhatsApp, ExportFormat::GoogleDocs] {
        let (exporter, _notifier, sink) = exporter(
            MemorySource::new()
                .with_block("d0", "zero", vec![json!("d1")])
                .with_block("d1", "one", vec![json!("d2")])
                .with_block("d2", "two", vec![json!("d3")])
                .with_block("d3", "three", vec![]),
            format,
        );
        exporter.export_block(&id("d0")).await.unwrap();
        let payloads = sink.payloads.lock().unwrap();
        for (level, line) in payloads[0].text.lines().enumerate() {
            assert!(line.starts_with(&format!("{}• ", "  ".repeat(level))));
        }
    }

    // Slack: flush through level 1, then four spaces per level.
    let (exporter, _notifier, sink) = exporter(source, ExportFormat::Slack);
    exporter.export_block(&id("d0")).await.unwrap();
    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(
        payloads[0].text,
        "zero\none\n        - two\n            - three\n"
    );
}

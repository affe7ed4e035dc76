// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use outline2clip::{
    AppError, BlockSource, ClipboardSink, CommandLineInput, ExportConfig, Exporter,
    HostHttpClient, LogNotifier, Notifier, PayloadSink, StdoutSink,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("outline2clip.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes one export: fetch the tree, format it, deliver the payload.
async fn execute_export(config: &ExportConfig) -> Result<(), AppError> {
    let client = HostHttpClient::new(&config.endpoint, &config.token)?;
    let source: Arc<dyn BlockSource> = Arc::new(client.clone());

    // Pipe mode keeps stdout clean for the payload, so host-UI
    // notifications are replaced with log lines.
    let (notifier, sink): (Arc<dyn Notifier>, Arc<dyn PayloadSink>) = if config.pipe {
        (Arc::new(LogNotifier), Arc::new(StdoutSink))
    } else {
        (Arc::new(client), Arc::new(ClipboardSink))
    };

    let exporter = Exporter::new(source, notifier, sink, config.format, config.max_depth);
    exporter.export_block(&config.block_id).await?;

    if !config.pipe {
        println!(
            "✓ Block copied to clipboard in {} format",
            config.format.display_name()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ExportConfig::resolve(cli)?;

    execute_export(&config).await?;

    Ok(())
}

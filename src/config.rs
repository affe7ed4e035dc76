// src/config.rs
use crate::error::AppError;
use crate::format::ExportFormat;
use crate::types::{ApiToken, BlockId, ValidationError};
use clap::Parser;
use url::Url;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:12315/api";
const TOKEN_ENV_VAR: &str = "OUTLINE_API_TOKEN";

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Identifier of the block to export (UUID)
    pub block_id: String,

    /// Export target format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Slack)]
    pub format: ExportFormat,

    /// Outline host API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Host API token (falls back to the OUTLINE_API_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Pipe mode - print the formatted text to stdout instead of the clipboard
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Maximum nesting depth fetched below the root block
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved export configuration — validated and ready to drive the pipeline.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub block_id: BlockId,
    pub format: ExportFormat,
    pub endpoint: String,
    pub token: ApiToken,
    pub pipe: bool,
    pub max_depth: usize,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token_str = match cli.token {
            Some(token) => token,
            None => std::env::var(TOKEN_ENV_VAR).map_err(|_| {
                AppError::MissingConfiguration(format!(
                    "no --token given and {} environment variable not set",
                    TOKEN_ENV_VAR
                ))
            })?,
        };

        let token = ApiToken::new(token_str)?;
        let block_id = BlockId::parse(&cli.block_id)?;
        let endpoint = validate_endpoint(&cli.endpoint)?;

        Ok(ExportConfig {
            block_id,
            format: cli.format,
            endpoint,
            token,
            pipe: cli.pipe,
            max_depth: cli.max_depth,
            verbose: cli.verbose,
        })
    }
}

/// Checks the endpoint parses as an http(s) URL.
fn validate_endpoint(endpoint: &str) -> Result<String, ValidationError> {
    let url = Url::parse(endpoint).map_err(|e| ValidationError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(endpoint.to_string())
}

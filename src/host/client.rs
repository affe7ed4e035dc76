// src/host/client.rs
//! Thin HTTP wrapper for the outline host's local API.
//!
//! The host exposes a single JSON endpoint; every call posts
//! `{"method": ..., "args": [...]}` and reads a JSON result. This
//! module handles authentication and request/response plumbing without
//! business logic.

use super::{BlockSource, HostBlock, Notifier};
use crate::error::AppError;
use crate::types::{ApiToken, BlockId};
use reqwest::{header, Client};
use serde_json::{json, Value};

const GET_BLOCK_METHOD: &str = "editor.getBlock";
const SHOW_MESSAGE_METHOD: &str = "ui.showMsg";

/// A thin wrapper around a reqwest Client for host API requests.
#[derive(Clone)]
pub struct HostHttpClient {
    client: Client,
    endpoint: String,
}

impl HostHttpClient {
    /// Creates a new HTTP client authenticated against the host API.
    pub fn new(endpoint: &str, token: &ApiToken) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Creates the default headers for host API requests.
    fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Invokes one host API method and returns its JSON result.
    pub async fn call(&self, method: &str, args: Value) -> Result<Value, AppError> {
        log::debug!("POST {} ({})", self.endpoint, method);

        let body = json!({ "method": method, "args": args });
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AppError::HostService {
                status,
                message: text.chars().take(200).collect(),
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            AppError::MalformedResponse(format!("{} returned invalid JSON: {}", method, e))
        })
    }
}

#[async_trait::async_trait]
impl BlockSource for HostHttpClient {
    async fn block(&self, id: &BlockId) -> Result<Option<HostBlock>, AppError> {
        let value = self.call(GET_BLOCK_METHOD, json!([id.as_str()])).await?;

        // The host answers JSON null for an unknown id.
        if value.is_null() {
            return Ok(None);
        }

        let block: HostBlock = serde_json::from_value(value)
            .map_err(|e| AppError::MalformedResponse(format!("block {}: {}", id, e)))?;
        Ok(Some(block))
    }
}

#[async_trait::async_trait]
impl Notifier for HostHttpClient {
    async fn notify(&self, message: &str) {
        if let Err(e) = self.call(SHOW_MESSAGE_METHOD, json!([message])).await {
            log::warn!("Host notification failed: {}", e);
        }
    }
}

//! Remote image-generation backend

use async_trait::async_trait;
use log::{debug, error};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Endpoint baked in at build time (see build.rs)
pub const DEFAULT_BACKEND_URL: &str = env!("PORTRAIT_BACKEND_URL");

#[derive(Debug, Serialize)]
struct GenerateImageRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateImageResponse {
    #[serde(rename = "imageBase64")]
    image_base64: String,
}

/// Something that turns a prompt into a base64-encoded image
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// JSON-over-HTTP backend: `POST { "prompt": ... }` → `{ "imageBase64": ... }`
pub struct HttpImageBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpImageBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Human-readable status text, falling back to the numeric code
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Interprets a backend reply
pub(crate) fn parse_response(status: StatusCode, body: &str) -> Result<String, GenerationError> {
    if !status.is_success() {
        error!("[backend] API error: {} - {}", status, body);
        return Err(GenerationError::Http {
            status_text: status_text(status),
        });
    }

    let parsed: GenerateImageResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Network(format!("Failed to parse response: {}", e)))?;
    Ok(parsed.image_base64)
}

#[async_trait]
impl ImageBackend for HttpImageBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("[backend] POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&GenerateImageRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

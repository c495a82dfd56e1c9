// HTTP client for the Analysis and Health services
//
// Upload: POST {base}/upload, multipart with a single `file` part.
// Health: GET {base}/health, JSON `{ "status": ... }`.

use crate::client::provider::{AnalysisService, HealthService};
use crate::config::Config;
use crate::models::{AnalysisReport, ErrorDetail, FileHandle, HealthResponse};
use crate::types::{AppError, AppResult, GENERIC_UPLOAD_FAILURE};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

/// Multipart field name the service reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    client: Client,
    upload_url: String,
    health_url: String,
}

impl HttpServiceClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            upload_url: config.upload_url(),
            health_url: config.health_url(),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    fn build_form(file: &FileHandle) -> AppResult<Form> {
        let mut part = Part::stream_with_length(file.bytes(), file.size())
            .file_name(file.name().to_string());
        if !file.media_type().is_empty() {
            part = part
                .mime_str(file.media_type())
                .map_err(|e| AppError::Validation(format!("Invalid media type: {}", e)))?;
        }
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[async_trait]
impl AnalysisService for HttpServiceClient {
    async fn upload(&self, file: &FileHandle) -> AppResult<AnalysisReport> {
        let form = Self::build_form(file)?;

        debug!(
            "POST {} ({}, {} bytes, {})",
            self.upload_url,
            file.name(),
            file.size(),
            file.media_type()
        );

        let response = self.client.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorDetail>(&body)
                .ok()
                .and_then(|d| d.message().map(str::to_string));
            warn!("Upload rejected by service ({}): {:?}", status, detail);
            return Err(AppError::Service(
                detail.unwrap_or_else(|| GENERIC_UPLOAD_FAILURE.to_string()),
            ));
        }

        serde_json::from_slice::<AnalysisReport>(&body)
            .map_err(|e| AppError::MalformedResponse(format!("upload response: {}", e)))
    }
}

#[async_trait]
impl HealthService for HttpServiceClient {
    async fn health(&self) -> AppResult<String> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::Service(format!("Health check returned {}", status)));
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("health response: {}", e)))?;

        Ok(health.status)
    }
}

//! HTTP client for communicating with the memorial server
//!
//! Every endpoint answers JSON, including failures (4xx/5xx carry an
//! `error` key), so bodies are decoded regardless of status.

use super::error::ApiError;
use super::traits::MemorialApi;
use super::types::{GenerateResponse, ImageKind, ImageUploadResponse, UploadResponse};
use crate::state::Payload;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// Default server address (Flask development server)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client for the memorial document server
pub struct ApiClient {
    http: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(std::time::Duration::from_secs(900))
            // Uploads are kept in the server session between requests
            .cookie_store(true)
            .user_agent(concat!("memorial-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json(&self, path: &str, payload: &Payload) -> Result<GenerateResponse, ApiError> {
        let url = self.endpoint(path);
        tracing::info!(%url, fields = payload.len(), "requesting generation");

        let response = self.http.post(&url).json(payload).send().await?;
        tracing::debug!(status = %response.status(), "generation answered");
        Ok(response.json::<GenerateResponse>().await?)
    }
}

/// Build a multipart part from a local file
async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.essence_str())?)
}

#[async_trait]
impl MemorialApi for ApiClient {
    async fn upload_files(&self, paths: &[PathBuf]) -> Result<UploadResponse, ApiError> {
        let mut form = Form::new();
        for path in paths {
            form = form.part("files", file_part(path).await?);
        }

        let url = self.endpoint("/api/upload");
        tracing::info!(%url, count = paths.len(), "uploading files");
        let response = self.http.post(&url).multipart(form).send().await?;
        Ok(response.json::<UploadResponse>().await?)
    }

    async fn upload_image(
        &self,
        path: &Path,
        kind: ImageKind,
    ) -> Result<ImageUploadResponse, ApiError> {
        let form = Form::new()
            .part("file", file_part(path).await?)
            .text("type", kind.as_str());

        let url = self.endpoint("/api/upload-image");
        tracing::info!(%url, kind = kind.as_str(), "uploading image");
        let response = self.http.post(&url).multipart(form).send().await?;
        Ok(response.json::<ImageUploadResponse>().await?)
    }

    async fn generate_document(&self, payload: &Payload) -> Result<GenerateResponse, ApiError> {
        self.post_json("/api/generate", payload).await
    }

    async fn generate_excel(&self, payload: &Payload) -> Result<GenerateResponse, ApiError> {
        self.post_json("/api/generate-excel", payload).await
    }

    async fn fetch_document(&self, download_url: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.resolve_url(download_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            self.endpoint(url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

//! Trait abstraction for the memorial server to enable mocking in tests

use super::error::ApiError;
use super::types::{GenerateResponse, ImageKind, ImageUploadResponse, UploadResponse};
use crate::state::Payload;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Operations offered by the document-generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemorialApi: Send + Sync {
    /// Upload supporting files (one `files` part per path)
    async fn upload_files(&self, paths: &[PathBuf]) -> Result<UploadResponse, ApiError>;

    /// Upload a watermark or logo image
    async fn upload_image(&self, path: &Path, kind: ImageKind)
        -> Result<ImageUploadResponse, ApiError>;

    /// Request DOCX generation
    async fn generate_document(&self, payload: &Payload) -> Result<GenerateResponse, ApiError>;

    /// Request spreadsheet generation
    async fn generate_excel(&self, payload: &Payload) -> Result<GenerateResponse, ApiError>;

    /// Fetch a generated document's bytes; non-OK statuses are errors
    async fn fetch_document(&self, download_url: &str) -> Result<Vec<u8>, ApiError>;

    /// Turn a server-relative link into an absolute URL
    fn resolve_url(&self, url: &str) -> String;
}

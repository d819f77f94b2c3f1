//! Backend client module for HTTP communication with the memorial server

mod client;
mod error;
mod traits;
mod types;

pub use client::{ApiClient, DEFAULT_SERVER_URL};
pub use error::ApiError;
pub use traits::MemorialApi;
pub use types::{GenerateResponse, ImageKind, ImageUploadResponse, UploadResponse};

#[cfg(test)]
pub use traits::MockMemorialApi;

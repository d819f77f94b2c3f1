//! Transport-level failures talking to the memorial server

use thiserror::Error;

/// Errors raised before a usable JSON answer (or document body) is obtained.
///
/// Logical failures reported by the server (`success: false`) are not errors
/// at this level; they arrive as regular responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("servidor respondeu {status} ao baixar {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("não foi possível ler {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

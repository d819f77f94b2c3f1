//! JSON shapes returned by the memorial server

use serde::Deserialize;

/// Answer to `POST /api/upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub files: Vec<String>,
    pub error: Option<String>,
}

/// Answer to `POST /api/generate` and `POST /api/generate-excel`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    pub download_url: Option<String>,
    pub filename: Option<String>,
    /// Size in bytes of the generated document (DOCX only)
    pub file_size: Option<u64>,
    pub error: Option<String>,
    pub traceback: Option<String>,
}

/// Answer to `POST /api/upload-image`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageUploadResponse {
    #[serde(default)]
    pub success: bool,
    pub filename: Option<String>,
    pub path: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Slot an uploaded image fills in generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageKind {
    #[default]
    Watermark,
    HeaderLogo,
    FooterLogo,
}

impl ImageKind {
    pub const ALL: [ImageKind; 3] = [Self::Watermark, Self::HeaderLogo, Self::FooterLogo];

    /// Value of the `type` form field expected by the server
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watermark => "marca_dagua",
            Self::HeaderLogo => "logo_cabecalho",
            Self::FooterLogo => "logo_rodape",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Watermark => "Marca d'água",
            Self::HeaderLogo => "Logo do cabeçalho",
            Self::FooterLogo => "Logo do rodapé",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

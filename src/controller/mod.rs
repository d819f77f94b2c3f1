//! Form controller: reacts to user actions on the memorial form
//!
//! Handlers never return errors. Each one reports its outcome through
//! notifications on the [`ViewBinding`] and leaves every trigger it disabled
//! ready again before returning.

mod excel;
mod generate;
mod images;
mod upload;
mod view;
mod visibility;

pub use images::is_supported_image;
pub use view::ViewBinding;
pub use visibility::{refresh_ane_width, refresh_sections};

use crate::api::MemorialApi;

/// Fallback text when the server reports a failure without a message
pub(crate) const UNKNOWN_ERROR: &str = "Erro desconhecido";

/// Drives server requests on behalf of the form
pub struct FormController<A: MemorialApi> {
    api: A,
}

impl<A: MemorialApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

/// Server-supplied error text, or the generic fallback
pub(crate) fn server_error(error: Option<&str>) -> &str {
    match error {
        Some(e) if !e.is_empty() => e,
        _ => UNKNOWN_ERROR,
    }
}

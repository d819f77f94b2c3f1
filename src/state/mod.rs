//! Application state module

mod app_state;
mod document_type;
mod downloads;
mod forms;
mod notifications;
mod payload;

pub use app_state::*;
pub use document_type::*;
pub use downloads::*;
pub use forms::*;
pub use notifications::*;
pub use payload::*;

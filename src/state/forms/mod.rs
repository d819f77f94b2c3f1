//! Form domain layer

mod field;
mod form_state;

pub use field::{FieldGroup, FieldValue, FormField, SelectOption};
pub use form_state::{
    MemorialForm, ANE_FIELD, DOCUMENT_TYPE_FIELD, HAS_AI_FIELD, HAS_RESTRICAO_FIELD, USOS_FIELD,
};

//! Form rendering

mod field_renderer;
mod memorial_form;

pub use field_renderer::{draw_field, field_hint, FIELD_HEIGHT};
pub use memorial_form::draw_memorial_form;

//! Reusable UI components

mod button;
mod toast;

pub use button::{render_shortcut_button, BUTTON_HEIGHT};
pub use toast::render_notifications;

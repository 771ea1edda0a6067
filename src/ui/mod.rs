//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Column widths, content wrapping and cursor placement
//! - [`viewport`]: Scroll position and visible range management

pub mod layout;
pub mod viewport;

mod render;
mod status;

pub use render::render;
pub use status::status_text;

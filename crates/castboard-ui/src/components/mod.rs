//! Reusable character components
//!
//! Class names match the stylesheet shipped by the desktop shell.

mod character_avatar;
mod character_card;
mod character_gallery;
mod status_line;

pub use character_avatar::*;
pub use character_card::*;
pub use character_gallery::*;
pub use status_line::*;

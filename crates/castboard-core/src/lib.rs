//! Castboard Core Library
//!
//! Framework-free logic behind the character cards of a chat/avatar UI.
//!
//! ## Overview
//!
//! A character card shows an avatar, a status line ("Thinking", "Speaking",
//! "Waiting") and a clamped preview of the last message. Everything the card
//! decides lives here so it can be tested without a renderer:
//!
//! - [`gradient`]: deterministic name → two-color gradient mapping
//! - [`character`]: the display state and the [`CardView`] it renders to
//! - [`roster`]: loading a cast of characters from JSON
//!
//! ## Quick Start
//!
//! ```
//! use castboard_core::{CharacterDisplayState, CharacterStatus};
//!
//! let ada = CharacterDisplayState::new("Ada", "Engineer").speaking(true);
//! let view = ada.render();
//!
//! assert_eq!(view.status, CharacterStatus::Speaking);
//! assert!(view.activity_dot);
//! ```

pub mod character;
pub mod error;
pub mod gradient;
pub mod roster;

// Re-exports
pub use character::{Avatar, CardView, CharacterDisplayState, CharacterStatus, MessagePreview};
pub use error::RosterError;
pub use gradient::{generate_gradient, name_hash, GradientSpec, Hsl};
pub use roster::Roster;

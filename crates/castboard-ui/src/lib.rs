//! Castboard UI Components
//!
//! Dioxus components for showing the cast of a conversation as cards.
//!
//! ## Card Anatomy
//!
//! - **Avatar**: image, or a name-seeded gradient with the name's initial
//! - **Activity dot**: pulses while the character is thinking or speaking
//! - **Status**: "Thinking...", "Speaking..." or "Waiting"
//! - **Message preview**: the last message, clamped to two lines
//!
//! All decisions come from [`castboard_core::CardView`]; these components
//! only map that description onto elements and CSS classes.

pub mod components;

pub use components::*;

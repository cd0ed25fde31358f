//! Roster context for Castboard.
//!
//! The roster is loaded once in `main`, before the window opens, and read by
//! components through [`use_roster`].

use std::path::PathBuf;
use std::sync::OnceLock;

use castboard_core::Roster;
use dioxus::prelude::*;

/// Roster loaded from the command line (or the demo cast)
static ROSTER: OnceLock<Roster> = OnceLock::new();

/// Store the roster for the lifetime of the process.
///
/// Only the first call has an effect.
pub fn set_roster(roster: Roster) {
    if ROSTER.set(roster).is_err() {
        tracing::warn!("Roster already initialized; ignoring replacement");
    }
}

/// The loaded roster, or the demo cast if none was stored
pub fn get_roster() -> Roster {
    ROSTER.get().cloned().unwrap_or_else(Roster::demo)
}

/// Default roster location: `<config_dir>/castboard/roster.json`
pub fn default_roster_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("castboard").join("roster.json"))
}

/// Hook to access the roster from context.
///
/// # Example
///
/// ```ignore
/// let roster = use_roster();
/// rsx! { CharacterGallery { roster: roster() } }
/// ```
pub fn use_roster() -> Signal<Roster> {
    use_context::<Signal<Roster>>()
}

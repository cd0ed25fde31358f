use castboard_core::Roster;
use castboard_ui::CharacterGallery;
use dioxus::prelude::*;

use crate::context::{get_roster, use_roster};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the roster context.
#[component]
pub fn App() -> Element {
    let roster: Signal<Roster> = use_signal(get_roster);
    use_context_provider(|| roster);

    rsx! {
        style { {GLOBAL_STYLES} }
        Cast {}
    }
}

/// The whole cast as a gallery of character cards.
#[component]
fn Cast() -> Element {
    let roster = use_roster();
    let count = roster.read().len();

    rsx! {
        main { class: "app-shell",
            h1 { class: "app-title", "Cast ({count})" }
            CharacterGallery { roster: roster() }
        }
    }
}

//! Character Gallery - the whole cast laid out as a grid of cards.

use castboard_core::Roster;
use dioxus::prelude::*;

use super::CharacterCard;

/// Props for the character gallery.
#[derive(Props, Clone, PartialEq)]
pub struct CharacterGalleryProps {
    pub roster: Roster,
}

/// Grid of character cards in roster order.
#[component]
pub fn CharacterGallery(props: CharacterGalleryProps) -> Element {
    if props.roster.is_empty() {
        return rsx! {
            div { class: "character-gallery-empty",
                p { "No characters in this conversation yet." }
            }
        };
    }

    rsx! {
        div { class: "character-gallery",
            for (index, state) in props.roster.characters.iter().cloned().enumerate() {
                CharacterCard {
                    key: "{index}-{state.name}",
                    state: state,
                }
            }
        }
    }
}

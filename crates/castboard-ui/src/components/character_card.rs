//! Character Card Component
//!
//! One card per character: avatar, name, occupation or role, optional
//! location, current status and a preview of the last message.

use castboard_core::{CharacterDisplayState, MessagePreview};
use dioxus::prelude::*;

use super::{CharacterAvatar, StatusLine};

/// Properties for the CharacterCard component
#[derive(Clone, PartialEq, Props)]
pub struct CharacterCardProps {
    /// Current display state; the card keeps no state of its own
    pub state: CharacterDisplayState,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Character card rendered from a [`CharacterDisplayState`]
///
/// # Design Notes
///
/// - Thinking wins over speaking: a character that is both shows "Thinking"
/// - Occupation replaces the role line when present
/// - The message preview is clamped to two lines and dimmed while thinking
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterCard {
///         state: CharacterDisplayState::new("Bob", "Guest")
///             .speaking(true)
///             .with_last_message("Hello there"),
///     }
/// }
/// ```
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let view = props.state.render();

    let base_class = view.card_class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };

    let title = view.title.clone();
    let secondary = view.secondary.clone();

    rsx! {
        div { class: "{full_class}",
            div { class: "character-header",
                CharacterAvatar {
                    avatar: view.avatar.clone(),
                    activity_dot: view.activity_dot,
                    highlighted: view.highlighted,
                }

                div { class: "character-info",
                    h3 { class: "character-name", "{title}" }
                    p { class: "character-secondary", "{secondary}" }
                    if let Some(location) = view.location.clone() {
                        p { class: "character-location", "{location}" }
                    }
                    StatusLine { status: view.status }
                }
            }

            if let Some(message) = view.message.clone() {
                MessageLine { message: message }
            }
        }
    }
}

/// Two-line clamped preview of the last message
#[component]
pub fn MessageLine(message: MessagePreview) -> Element {
    let class = message.class();
    let opacity = message.opacity();

    rsx! {
        p {
            class: "{class}",
            style: "opacity: {opacity};",
            "{message.text}"
        }
    }
}

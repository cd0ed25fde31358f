//! Status Line Component
//!
//! Shows what the character is doing right now:
//! - "Thinking" - composing a reply, with animated ellipsis
//! - "Speaking" - delivering a reply, accent color and animated ellipsis
//! - "Waiting" - idle

use castboard_core::CharacterStatus;
use dioxus::prelude::*;

/// Properties for the StatusLine component
#[derive(Clone, PartialEq, Props)]
pub struct StatusLineProps {
    pub status: CharacterStatus,
}

#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let status = props.status;
    let label = status.label();
    let class = status.class();

    rsx! {
        p { class: "character-status {class}",
            if status.is_animated() {
                span { class: "status-label",
                    "{label}"
                    span { class: "typing-animation", "..." }
                }
            } else {
                "{label}"
            }
        }
    }
}


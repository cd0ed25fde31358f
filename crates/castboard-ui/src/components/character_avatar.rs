//! Character Avatar Component
//!
//! Circular avatar showing either the character's image or a gradient
//! generated from their name with the initial on top.

use castboard_core::Avatar;
use dioxus::prelude::*;

/// Inline style for the avatar circle.
///
/// Only generated avatars get a background; images fill the circle.
pub fn avatar_style(avatar: &Avatar) -> Option<String> {
    avatar.gradient().map(|gradient| gradient.css_background())
}

/// Properties for the CharacterAvatar component
#[derive(Clone, PartialEq, Props)]
pub struct CharacterAvatarProps {
    /// What fills the circle
    pub avatar: Avatar,
    /// Draw the pulsing activity dot
    #[props(default = false)]
    pub activity_dot: bool,
    /// Ring and scale-up while the character is thinking
    #[props(default = false)]
    pub highlighted: bool,
}

/// Circular avatar with an optional activity dot
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterAvatar {
///         avatar: state.avatar(),
///         activity_dot: state.shows_activity_dot(),
///     }
/// }
/// ```
#[component]
pub fn CharacterAvatar(props: CharacterAvatarProps) -> Element {
    let class = if props.highlighted {
        "character-avatar active"
    } else {
        "character-avatar"
    };
    let style = avatar_style(&props.avatar).unwrap_or_default();

    let fill = match &props.avatar {
        Avatar::Image { url, alt } => rsx! {
            img {
                class: "avatar-image",
                src: "{url}",
                alt: "{alt}",
            }
        },
        Avatar::Generated { initial, .. } => rsx! {
            div { class: "avatar-initial",
                span { "{initial}" }
            }
        },
    };

    rsx! {
        div { class: "{class}", style: "{style}",
            {fill}

            if props.activity_dot {
                span {
                    class: "activity-dot",
                    role: "img",
                    "aria-label": "Active",
                }
            }
        }
    }
}

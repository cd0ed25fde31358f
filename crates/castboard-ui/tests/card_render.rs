//! Character cards rendered to HTML
//!
//! Renders components server-side and checks the markup the stylesheet
//! depends on.

use castboard_core::CharacterDisplayState;
use castboard_ui::CharacterCard;
use dioxus::prelude::*;

fn render_card(state: CharacterDisplayState) -> String {
    dioxus_ssr::render_element(rsx! {
        CharacterCard { state: state }
    })
}

#[test]
fn speaking_card_with_message() {
    let html = render_card(
        CharacterDisplayState::new("Bob", "Guest")
            .speaking(true)
            .with_last_message("Hello there"),
    );

    assert!(html.contains("status-speaking"));
    assert!(html.contains("Speaking"));
    assert!(html.contains("typing-animation"));
    assert!(html.contains("activity-dot"));
    assert!(html.contains("Hello there"));
    assert!(html.contains("opacity: 1;"));
    assert!(!html.contains("typing-text"));
    assert!(!html.contains("character-location"));
    assert!(!html.contains("character-card active"));
}

#[test]
fn thinking_card_dims_message() {
    let html = render_card(
        CharacterDisplayState::new("Ada", "Host")
            .active(true)
            .speaking(true)
            .with_last_message("Let me see"),
    );

    assert!(html.contains("status-thinking"));
    assert!(!html.contains("status-speaking"));
    assert!(html.contains("character-card active"));
    assert!(html.contains("character-avatar active"));
    assert!(html.contains("message-preview typing-text dimmed"));
    assert!(html.contains("opacity: 0.7;"));
}

#[test]
fn image_avatar_card_is_waiting() {
    let html = render_card(
        CharacterDisplayState::new("Ada", "Engineer").with_avatar_url("http://x/a.png"),
    );

    assert!(html.contains("http://x/a.png"));
    assert!(html.contains("avatar-image"));
    assert!(!html.contains("linear-gradient"));
    assert!(!html.contains("avatar-initial"));
    assert!(html.contains("Waiting"));
    assert!(!html.contains("typing-animation"));
    assert!(!html.contains("activity-dot"));
    assert!(!html.contains("message-preview"));
}

#[test]
fn generated_avatar_card_shows_initial_and_location() {
    let html = render_card(
        CharacterDisplayState::new("Ada", "Engineer")
            .with_occupation("Mathematician")
            .with_location("London"),
    );

    assert!(html.contains("avatar-initial"));
    assert!(html.contains(">A<"));
    assert!(html.contains("hsl(142, 70%, 80%)"));
    assert!(html.contains("Mathematician"));
    assert!(!html.contains("Engineer"));
    assert!(html.contains("character-location"));
    assert!(html.contains("London"));
}

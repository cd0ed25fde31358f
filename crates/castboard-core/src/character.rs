//! Character Display State
//!
//! The input a character card is rendered from, and [`CardView`], the
//! framework-free description of what the card shows. Every render is a pure
//! function of the current state; nothing is remembered between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gradient::{generate_gradient, GradientSpec};

/// Everything a card needs to know about one character.
///
/// Field names serialize in camelCase (`isActive`, `avatarUrl`, ...) so roster
/// files read the same as the props the cards were designed around.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDisplayState {
    /// Display name; also seeds the avatar gradient and initial
    pub name: String,

    /// Character is composing a reply
    #[serde(default)]
    pub is_active: bool,

    /// Character is currently delivering a reply
    #[serde(default)]
    pub is_speaking: bool,

    /// Most recent message, previewed under the header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,

    /// Role in the conversation, shown when no occupation is set
    #[serde(default)]
    pub role: String,

    /// Carried for the host application; the card does not display it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    /// Image shown instead of the generated gradient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Treat empty strings the same as missing values.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl CharacterDisplayState {
    /// Create an idle character with just a name and role
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            ..Default::default()
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn speaking(mut self, is_speaking: bool) -> Self {
        self.is_speaking = is_speaking;
        self
    }

    pub fn with_last_message(mut self, message: impl Into<String>) -> Self {
        self.last_message = Some(message.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Status shown under the name.
    ///
    /// `is_active` wins over `is_speaking`.
    pub fn status(&self) -> CharacterStatus {
        CharacterStatus::from_flags(self.is_active, self.is_speaking)
    }

    /// Whether the pulsing dot is drawn over the avatar
    pub fn shows_activity_dot(&self) -> bool {
        self.is_active || self.is_speaking
    }

    /// Uppercased first character of the name, or an empty string when the
    /// name is empty.
    ///
    /// Some characters uppercase to more than one (`ß` becomes `SS`).
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Occupation if set, otherwise the role
    pub fn secondary_line(&self) -> &str {
        present(&self.occupation).unwrap_or(self.role.as_str())
    }

    pub fn location_caption(&self) -> Option<&str> {
        present(&self.location)
    }

    /// Avatar image when a URL is set, otherwise the generated gradient
    pub fn avatar(&self) -> Avatar {
        match present(&self.avatar_url) {
            Some(url) => Avatar::Image {
                url: url.to_string(),
                alt: self.name.clone(),
            },
            None => Avatar::Generated {
                gradient: generate_gradient(&self.name),
                initial: self.initial(),
            },
        }
    }

    /// Preview of the last message, dimmed while the character is thinking
    pub fn message_preview(&self) -> Option<MessagePreview> {
        present(&self.last_message).map(|text| MessagePreview {
            text: text.to_string(),
            dimmed: self.is_active,
        })
    }

    /// Optional fields that are set but empty, and therefore not shown
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("lastMessage", &self.last_message),
            ("location", &self.location),
            ("occupation", &self.occupation),
            ("avatarUrl", &self.avatar_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref() == Some(""))
        .map(|(field, _)| field)
        .collect()
    }

    /// Describe the complete card for the current state.
    pub fn render(&self) -> CardView {
        if self.name.is_empty() {
            tracing::warn!("Rendering character card with an empty name");
        }
        for field in self.blank_fields() {
            tracing::warn!(name = %self.name, field, "Ignoring blank field");
        }

        let view = CardView {
            avatar: self.avatar(),
            activity_dot: self.shows_activity_dot(),
            highlighted: self.is_active,
            title: self.name.clone(),
            secondary: self.secondary_line().to_string(),
            location: self.location_caption().map(str::to_string),
            status: self.status(),
            message: self.message_preview(),
        };

        tracing::debug!(
            name = %self.name,
            status = %view.status,
            generated_avatar = view.avatar.is_generated(),
            "Rendered character card"
        );

        view
    }
}

/// Status label of a character, in priority order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CharacterStatus {
    /// Composing a reply
    Thinking,
    /// Delivering a reply
    Speaking,
    /// Idle
    #[default]
    Waiting,
}

impl CharacterStatus {
    pub fn from_flags(is_active: bool, is_speaking: bool) -> Self {
        if is_active {
            CharacterStatus::Thinking
        } else if is_speaking {
            CharacterStatus::Speaking
        } else {
            CharacterStatus::Waiting
        }
    }

    /// Returns the display label for this status
    pub fn label(&self) -> &'static str {
        match self {
            CharacterStatus::Thinking => "Thinking",
            CharacterStatus::Speaking => "Speaking",
            CharacterStatus::Waiting => "Waiting",
        }
    }

    /// Whether the label is followed by an animated ellipsis
    pub fn is_animated(&self) -> bool {
        matches!(self, CharacterStatus::Thinking | CharacterStatus::Speaking)
    }

    /// Returns the CSS class for this status
    pub fn class(&self) -> &'static str {
        match self {
            CharacterStatus::Thinking => "status-thinking",
            CharacterStatus::Speaking => "status-speaking",
            CharacterStatus::Waiting => "status-waiting",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_animated() {
            write!(f, "{}...", self.label())
        } else {
            f.write_str(self.label())
        }
    }
}

/// What fills the avatar circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image { url: String, alt: String },
    Generated { gradient: GradientSpec, initial: String },
}

impl Avatar {
    pub fn is_generated(&self) -> bool {
        matches!(self, Avatar::Generated { .. })
    }

    /// Gradient background, if this avatar is generated
    pub fn gradient(&self) -> Option<&GradientSpec> {
        match self {
            Avatar::Generated { gradient, .. } => Some(gradient),
            Avatar::Image { .. } => None,
        }
    }
}

/// Two-line clamped preview of the last message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePreview {
    pub text: String,
    /// Reduced opacity while the character is thinking
    pub dimmed: bool,
}

impl MessagePreview {
    pub fn opacity(&self) -> f32 {
        if self.dimmed {
            0.7
        } else {
            1.0
        }
    }

    pub fn class(&self) -> &'static str {
        if self.dimmed {
            "message-preview typing-text dimmed"
        } else {
            "message-preview"
        }
    }
}

/// Framework-free description of a rendered character card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub avatar: Avatar,
    /// Pulsing dot over the avatar
    pub activity_dot: bool,
    /// Ring and pulse around the card and avatar
    pub highlighted: bool,
    pub title: String,
    pub secondary: String,
    pub location: Option<String>,
    pub status: CharacterStatus,
    pub message: Option<MessagePreview>,
}

impl CardView {
    pub fn card_class(&self) -> &'static str {
        if self.highlighted {
            "character-card active"
        } else {
            "character-card"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Hsl;

    #[test]
    fn status_priority() {
        let both = CharacterDisplayState::new("Ada", "Host")
            .active(true)
            .speaking(true);
        assert_eq!(both.status(), CharacterStatus::Thinking);

        let speaking = CharacterDisplayState::new("Ada", "Host").speaking(true);
        assert_eq!(speaking.status(), CharacterStatus::Speaking);

        let idle = CharacterDisplayState::new("Ada", "Host");
        assert_eq!(idle.status(), CharacterStatus::Waiting);
    }

    #[test]
    fn status_labels() {
        assert_eq!(CharacterStatus::Thinking.label(), "Thinking");
        assert_eq!(CharacterStatus::Speaking.label(), "Speaking");
        assert_eq!(CharacterStatus::Waiting.label(), "Waiting");

        assert_eq!(CharacterStatus::Speaking.to_string(), "Speaking...");
        assert_eq!(CharacterStatus::Waiting.to_string(), "Waiting");
        assert!(!CharacterStatus::Waiting.is_animated());
    }

    #[test]
    fn status_default_is_waiting() {
        assert_eq!(CharacterStatus::default(), CharacterStatus::Waiting);
    }

    #[test]
    fn secondary_line_falls_back_to_role() {
        let state = CharacterDisplayState::new("Ada", "Engineer");
        assert_eq!(state.secondary_line(), "Engineer");

        let state = state.with_occupation("Mathematician");
        assert_eq!(state.secondary_line(), "Mathematician");
    }

    #[test]
    fn empty_occupation_counts_as_missing() {
        let state = CharacterDisplayState::new("Ada", "Engineer").with_occupation("");
        assert_eq!(state.secondary_line(), "Engineer");
    }

    #[test]
    fn avatar_image_scenario() {
        let state = CharacterDisplayState::new("Ada", "Engineer").with_avatar_url("http://x/a.png");
        let view = state.render();

        assert_eq!(
            view.avatar,
            Avatar::Image {
                url: "http://x/a.png".to_string(),
                alt: "Ada".to_string(),
            }
        );
        assert!(view.avatar.gradient().is_none());
        assert_eq!(view.status, CharacterStatus::Waiting);
        assert!(!view.activity_dot);
    }

    #[test]
    fn generated_avatar_scenario() {
        let view = CharacterDisplayState::new("Ada", "Engineer").render();

        match view.avatar {
            Avatar::Generated { gradient, initial } => {
                assert_eq!(initial, "A");
                assert_eq!(gradient.from, Hsl::new(142, 70, 80));
                assert_eq!(gradient.to, Hsl::new(284, 70, 70));
            }
            other => panic!("expected generated avatar, got {:?}", other),
        }
    }

    #[test]
    fn speaking_with_message_scenario() {
        let view = CharacterDisplayState::new("Bob", "Guest")
            .speaking(true)
            .with_last_message("Hello there")
            .render();

        assert_eq!(view.status, CharacterStatus::Speaking);
        assert_eq!(view.status.to_string(), "Speaking...");
        assert!(view.activity_dot);
        assert!(!view.highlighted);

        let message = view.message.expect("message preview");
        assert_eq!(message.text, "Hello there");
        assert!(!message.dimmed);
        assert_eq!(message.opacity(), 1.0);
    }

    #[test]
    fn thinking_dims_message() {
        let view = CharacterDisplayState::new("Bob", "Guest")
            .active(true)
            .with_last_message("Let me see")
            .render();

        assert_eq!(view.card_class(), "character-card active");

        let message = view.message.expect("message preview");
        assert!(message.dimmed);
        assert_eq!(message.opacity(), 0.7);
        assert_eq!(message.class(), "message-preview typing-text dimmed");
    }

    #[test]
    fn empty_name_renders_empty_initial() {
        let state = CharacterDisplayState::new("", "Ghost");
        assert_eq!(state.initial(), "");

        let view = state.render();
        match view.avatar {
            Avatar::Generated { initial, .. } => assert!(initial.is_empty()),
            other => panic!("expected generated avatar, got {:?}", other),
        }
    }

    #[test]
    fn blank_optionals_are_reported_and_omitted() {
        let state = CharacterDisplayState::new("Ada", "Engineer")
            .with_last_message("")
            .with_location("")
            .with_avatar_url("")
            .with_occupation("Mathematician");

        assert_eq!(state.blank_fields(), vec!["lastMessage", "location", "avatarUrl"]);

        let view = state.render();
        assert!(view.message.is_none());
        assert!(view.location.is_none());
        assert!(view.avatar.is_generated());
        assert_eq!(view.secondary, "Mathematician");
    }

    #[test]
    fn no_blank_fields_when_unset() {
        assert!(CharacterDisplayState::new("Ada", "Engineer").blank_fields().is_empty());
    }

    #[test]
    fn initial_uppercases_first_char() {
        assert_eq!(CharacterDisplayState::new("ada", "").initial(), "A");
        assert_eq!(CharacterDisplayState::new("\u{00E9}mile", "").initial(), "\u{00C9}");
        assert_eq!(CharacterDisplayState::new("\u{00DF}", "").initial(), "SS");
    }

    #[test]
    fn location_and_missing_fields_are_omitted() {
        let view = CharacterDisplayState::new("Ada", "Engineer").render();
        assert!(view.location.is_none());
        assert!(view.message.is_none());

        let view = CharacterDisplayState::new("Ada", "Engineer")
            .with_location("London")
            .render();
        assert_eq!(view.location.as_deref(), Some("London"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "name": "Ada",
            "role": "Engineer",
            "isSpeaking": true,
            "lastMessage": "Hi",
            "avatarUrl": "http://x/a.png",
            "age": 36
        }"#;

        let state: CharacterDisplayState = serde_json::from_str(json).unwrap();
        assert!(state.is_speaking);
        assert!(!state.is_active);
        assert_eq!(state.last_message.as_deref(), Some("Hi"));
        assert_eq!(state.avatar_url.as_deref(), Some("http://x/a.png"));
        assert_eq!(state.age, Some(36));
    }
}

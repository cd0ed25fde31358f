//! Roster Loading
//!
//! A roster is the cast of characters shown side by side. It is read once
//! from a JSON file, either a bare array of characters or an object with a
//! `characters` array.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::CharacterDisplayState;
use crate::error::{Result, RosterError};

/// Ordered list of characters to display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roster {
    pub characters: Vec<CharacterDisplayState>,
}

/// Both accepted file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    List(Vec<CharacterDisplayState>),
    Object { characters: Vec<CharacterDisplayState> },
}

impl Roster {
    /// Build a roster, rejecting characters without a usable name.
    pub fn new(characters: Vec<CharacterDisplayState>) -> Result<Self> {
        if let Some(index) = characters.iter().position(|c| c.name.trim().is_empty()) {
            return Err(RosterError::EmptyName { index });
        }
        Ok(Self { characters })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let characters = match serde_json::from_str::<RosterFile>(json)? {
            RosterFile::List(characters) => characters,
            RosterFile::Object { characters } => characters,
        };
        Self::new(characters)
    }

    /// Load a roster file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded {} characters from {:?}",
            roster.characters.len(),
            path
        );

        Ok(roster)
    }

    /// Built-in cast used when no roster file is available
    pub fn demo() -> Self {
        Self {
            characters: vec![
                CharacterDisplayState::new("Ada", "Host")
                    .with_occupation("Mathematician")
                    .with_location("London")
                    .with_age(36)
                    .active(true)
                    .with_last_message("Give me a moment to work through the numbers."),
                CharacterDisplayState::new("Bob", "Guest")
                    .speaking(true)
                    .with_last_message("Hello there"),
                CharacterDisplayState::new("Alexandra", "Moderator")
                    .with_location("Lisbon")
                    .with_last_message(
                        "Let's keep each answer short so everyone gets a turn before the break.",
                    ),
                CharacterDisplayState::new("Marcus", "Observer"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterDisplayState> {
        self.characters.iter()
    }
}

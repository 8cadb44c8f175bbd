//! Swappable content packs
//!
//! Quiz questions, obstacle names and death messages differ between game
//! variants. They're data, not code: a pack is a JSON document and the sim
//! only ever sees the question list.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::{ObstacleKind, Question};

/// The pack compiled into the binary
const BUILTIN_PACK: &str = include_str!("../assets/packs/colombia.json");

/// Message shown on the death screen, per obstacle kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathMessages {
    pub ground: String,
    pub aerial: String,
}

/// One game variant's text content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    pub title: String,
    /// What ground obstacles are called (used for sprite lookup too)
    pub ground_label: String,
    pub aerial_label: String,
    pub death_messages: DeathMessages,
    pub questions: Vec<Question>,
}

impl ContentPack {
    /// The pack shipped with the game
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_PACK)
    }

    /// Parse and validate a pack
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let pack: ContentPack = serde_json::from_str(json)?;
        pack.validate()?;
        Ok(pack)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(ConfigError::TooFewOptions {
                    question: i,
                    count: q.options.len(),
                });
            }
            if q.correct_index >= q.options.len() {
                return Err(ConfigError::CorrectIndexOutOfRange {
                    question: i,
                    index: q.correct_index,
                    options: q.options.len(),
                });
            }
        }
        Ok(())
    }

    pub fn death_message(&self, kind: ObstacleKind) -> &str {
        match kind {
            ObstacleKind::Ground => &self.death_messages.ground,
            ObstacleKind::Aerial => &self.death_messages.aerial,
        }
    }

    pub fn label(&self, kind: ObstacleKind) -> &str {
        match kind {
            ObstacleKind::Ground => &self.ground_label,
            ObstacleKind::Aerial => &self.aerial_label,
        }
    }
}

//! Supported player languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the story is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// French.
    Fr,
}

/// Returned when a string is not a supported language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// The two-letter language code used in paths and persisted records.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Path of the language-selection entry point, e.g. `/en`.
    ///
    /// Visiting it starts a new game in this language.
    #[must_use]
    pub fn entry_path(self) -> String {
        format!("/{}", self.code())
    }

    /// Path of the room-display endpoint, e.g. `/game_en`.
    #[must_use]
    pub fn game_path(self) -> String {
        format!("/game_{}", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(UnsupportedLanguage(other.to_owned())),
        }
    }
}

//! Rooms of the story and the action resolution rule.

use std::collections::BTreeMap;

use gothon_core::language::Language;
use serde::{Deserialize, Serialize};

/// Transition key matched when no other key does.
pub const WILDCARD: &str = "*";

/// Normalizes raw player input into an action token: surrounding
/// whitespace is removed and the result is lowercased.
#[must_use]
pub fn normalize_action(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A value written once per supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    /// English variant.
    pub en: T,
    /// French variant.
    pub fr: T,
}

impl<T> Localized<T> {
    /// Creates a value from its two variants.
    pub fn new(en: T, fr: T) -> Self {
        Self { en, fr }
    }

    /// Returns the variant for `lang`.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        }
    }
}

/// Decorative images shown with a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Main illustration.
    pub primary: String,
    /// Small icon.
    pub icon: String,
}

/// A node of the story graph.
///
/// Texts are fixed at construction. The transition table is filled in by
/// [`crate::StoryGraphBuilder`] and is read-only once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    tag: String,
    name: Localized<String>,
    description: Localized<String>,
    complement: Localized<String>,
    choices: Localized<String>,
    media: Option<Media>,
    pub(crate) transitions: BTreeMap<String, String>,
}

impl Room {
    /// Creates a room with no transitions.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        name: Localized<String>,
        description: Localized<String>,
        complement: Localized<String>,
        choices: Localized<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            name,
            description,
            complement,
            choices,
            media: None,
            transitions: BTreeMap::new(),
        }
    }

    /// Attaches decorative media.
    #[must_use]
    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Unique stable identifier.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Room title.
    #[must_use]
    pub fn name(&self) -> &Localized<String> {
        &self.name
    }

    /// Main narrative text.
    #[must_use]
    pub fn description(&self) -> &Localized<String> {
        &self.description
    }

    /// Closing text, used by epilogue rooms.
    #[must_use]
    pub fn complement(&self) -> &Localized<String> {
        &self.complement
    }

    /// Hint text listing what the player may enter.
    #[must_use]
    pub fn choices(&self) -> &Localized<String> {
        &self.choices
    }

    #[must_use]
    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    /// Outgoing transitions keyed by normalized action token.
    #[must_use]
    pub fn transitions(&self) -> &BTreeMap<String, String> {
        &self.transitions
    }

    /// A terminal room ends the game: no input can leave it.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Resolves `action` to the tag of the next room.
    ///
    /// The normalized token is looked up as an exact key first; only if that
    /// fails is the [`WILDCARD`] key consulted. `None` means the player stays.
    #[must_use]
    pub fn resolve(&self, action: &str) -> Option<&str> {
        let token = normalize_action(action);
        self.transitions
            .get(&token)
            .or_else(|| self.transitions.get(WILDCARD))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Localized<String> {
        Localized::new(value.to_owned(), value.to_owned())
    }

    fn keypad() -> Room {
        let mut room = Room::new("keypad", text("Keypad"), text(""), text(""), text("[###]"));
        room.transitions.insert("132".to_owned(), "open".to_owned());
        room.transitions.insert(WILDCARD.to_owned(), "retry".to_owned());
        room
    }

    #[test]
    fn test_normalize_action_trims_and_lowercases() {
        assert_eq!(normalize_action("  A \n"), "a");
        assert_eq!(normalize_action("   "), "");
    }

    #[test]
    fn test_resolve_prefers_exact_match_over_wildcard() {
        assert_eq!(keypad().resolve("132"), Some("open"));
        assert_eq!(keypad().resolve(" 132\t"), Some("open"));
    }

    #[test]
    fn test_resolve_falls_back_to_wildcard() {
        assert_eq!(keypad().resolve("999"), Some("retry"));
        // Whitespace-only input normalizes to the empty token.
        assert_eq!(keypad().resolve("   "), Some("retry"));
    }

    #[test]
    fn test_resolve_without_wildcard_stays() {
        let mut room = Room::new("hall", text("Hall"), text(""), text(""), text(""));
        room.transitions.insert("a".to_owned(), "next".to_owned());

        assert_eq!(room.resolve("A"), Some("next"));
        assert_eq!(room.resolve("b"), None);
        assert_eq!(room.resolve(""), None);
    }

    #[test]
    fn test_room_without_transitions_is_terminal() {
        let room = Room::new("end", text("Epilogue"), text(""), text("THE END"), text(""));

        assert!(room.is_terminal());
        assert_eq!(room.resolve("anything"), None);
        assert!(!keypad().is_terminal());
    }

    #[test]
    fn test_localized_get_selects_language() {
        let name = Localized::new("The Bridge".to_owned(), "Le pont".to_owned());
        assert_eq!(name.get(Language::En), "The Bridge");
        assert_eq!(name.get(Language::Fr), "Le pont");
    }
}

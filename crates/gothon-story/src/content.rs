//! Story content loading.
//!
//! A story is a YAML document listing rooms with their bilingual texts and
//! `paths`. The Gothon story ships embedded in the crate; another file can
//! be loaded from disk with [`load_from_path`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::graph::StoryGraph;
use crate::domain::room::{Localized, Media, Room};
use crate::error::StoryError;

/// The bundled story document.
pub const BUNDLED_STORY: &str = include_str!("../content/gothons.yaml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryDocument {
    start: String,
    rooms: Vec<RoomDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomDocument {
    tag: String,
    name: Localized<String>,
    description: Localized<String>,
    #[serde(default)]
    complement: Localized<String>,
    #[serde(default)]
    choices: Localized<String>,
    #[serde(default)]
    media: Option<Media>,
    #[serde(default)]
    paths: BTreeMap<String, String>,
}

/// Builds the bundled Gothon story.
///
/// # Errors
///
/// Returns `StoryError` if the embedded document is invalid, which only a
/// broken build can cause.
pub fn bundled() -> Result<StoryGraph, StoryError> {
    from_yaml(BUNDLED_STORY)
}

/// Builds a story graph from a YAML document.
///
/// Every room is registered with its texts before any transition is
/// attached, so paths may refer to rooms defined later in the document.
///
/// # Errors
///
/// Returns `StoryError::Parse` if the document does not match the story
/// schema, or any graph validation error raised by the builder.
pub fn from_yaml(document: &str) -> Result<StoryGraph, StoryError> {
    let story: StoryDocument = serde_yaml::from_str(document)?;

    let mut builder = StoryGraph::builder();
    let mut wiring = Vec::with_capacity(story.rooms.len());
    for doc in story.rooms {
        let mut room = Room::new(
            doc.tag.clone(),
            doc.name,
            doc.description,
            doc.complement,
            doc.choices,
        );
        if let Some(media) = doc.media {
            room = room.with_media(media);
        }
        builder.add_room(room)?;
        wiring.push((doc.tag, doc.paths));
    }

    for (from, paths) in &wiring {
        for (action, to) in paths {
            builder.connect(from, action, to)?;
        }
    }

    let graph = builder.build(&story.start)?;
    let unreachable = graph.unreachable_tags();
    if !unreachable.is_empty() {
        warn!(rooms = ?unreachable, "story has rooms unreachable from the start room");
    }
    debug!(rooms = graph.len(), start = graph.start_tag(), "story graph built");
    Ok(graph)
}

/// Reads and builds a story graph from a YAML file.
///
/// # Errors
///
/// Returns `StoryError::Io` if the file cannot be read, otherwise the same
/// errors as [`from_yaml`].
pub fn load_from_path(path: &Path) -> Result<StoryGraph, StoryError> {
    let document = std::fs::read_to_string(path)?;
    from_yaml(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gothon_core::language::Language;
    use proptest::prelude::*;

    fn gothons() -> StoryGraph {
        bundled().expect("bundled story must build")
    }

    /// Walks the story from its start room, returning the final tag.
    fn play(graph: &StoryGraph, actions: &[&str]) -> String {
        let mut room = graph.start();
        for action in actions {
            if let Some(next) = graph.go(room, action) {
                room = next;
            }
        }
        room.tag().to_owned()
    }

    #[test]
    fn test_bundled_story_has_every_room() {
        let graph = gothons();

        assert_eq!(graph.len(), 17);
        assert_eq!(graph.start_tag(), "lower_deck_cursive");
        assert_eq!(graph.unreachable_tags(), vec!["generic_death"]);
    }

    #[test]
    fn test_bundled_story_texts_are_bilingual() {
        let graph = gothons();
        let bridge = graph.lookup("the_bridge").unwrap();

        assert_eq!(bridge.name().get(Language::En), "The Bridge");
        assert_eq!(bridge.name().get(Language::Fr), "Le pont");
        assert_eq!(
            bridge.choices().get(Language::En),
            "[a] throw the bomb [b] slowly place the bomb"
        );
        let media = bridge.media().unwrap();
        assert_eq!(media.primary, "/static/img/img_k.jpg");
        assert_eq!(media.icon, "/static/img/icon_c.png");
    }

    #[test]
    fn test_epilogue_rooms_are_terminal() {
        let graph = gothons();
        for tag in [
            "lower_deck_cursive_death_1",
            "lower_deck_cursive_death_2",
            "the_armory_death",
            "the_bridge_death",
            "the_end_loser",
            "the_end_winner",
            "generic_death",
        ] {
            let room = graph.lookup(tag).unwrap();
            assert!(room.is_terminal(), "{tag} should be terminal");
            assert_eq!(room.complement().get(Language::En), "THE END");
            assert_eq!(room.complement().get(Language::Fr), "FIN");
        }
    }

    #[test]
    fn test_rooms_with_exits_show_choices_in_both_languages() {
        let graph = gothons();
        for room in graph.rooms().filter(|room| !room.is_terminal()) {
            assert!(!room.choices().get(Language::En).is_empty(), "{}", room.tag());
            assert!(!room.choices().get(Language::Fr).is_empty(), "{}", room.tag());
        }
    }

    #[test]
    fn test_armory_code_reaches_the_bridge() {
        let graph = gothons();
        let armory = graph.lookup("the_armory").unwrap();

        assert_eq!(graph.go(armory, "132").unwrap().tag(), "the_bridge");
        assert_eq!(graph.go(armory, "xyz").unwrap().tag(), "the_armory_2");
        assert_eq!(graph.go(armory, "a").unwrap().tag(), "the_armory_death");
    }

    #[test]
    fn test_five_wrong_codes_fuse_the_lock() {
        let graph = gothons();

        assert_eq!(
            play(&graph, &["c", "111", "112", "113", "121"]),
            "the_armory_5"
        );
        assert_eq!(
            play(&graph, &["c", "111", "112", "113", "121", "122"]),
            "the_armory_death"
        );
    }

    #[test]
    fn test_escape_pod_three_picks_winner_or_loser() {
        let graph = gothons();
        let pod = graph.lookup("escape_pod_3").unwrap();

        assert_eq!(graph.go(pod, "2").unwrap().tag(), "the_end_winner");
        for wrong in ["1", "3", "4", "5"] {
            assert_eq!(graph.go(pod, wrong).unwrap().tag(), "the_end_loser");
        }
        assert!(graph.go(pod, "6").is_none());
    }

    #[test]
    fn test_winning_walkthrough() {
        let graph = gothons();

        assert_eq!(
            play(&graph, &["C", " 132 ", "b", "4", "2"]),
            "the_end_winner"
        );
    }

    #[test]
    fn test_from_yaml_reports_unknown_target() {
        let document = r#"
start: a
rooms:
  - tag: a
    name: { en: "A", fr: "A" }
    description: { en: "", fr: "" }
    paths:
      "x": b
"#;

        let err = from_yaml(document).unwrap_err();

        assert!(matches!(err, StoryError::UnknownTarget { .. }));
    }

    #[test]
    fn test_from_yaml_reports_malformed_document() {
        let err = from_yaml("start: a\nrooms: 3\n").unwrap_err();

        assert!(matches!(err, StoryError::Parse(_)));
    }

    #[test]
    fn test_load_from_path_reads_story_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.yaml");
        std::fs::write(&path, BUNDLED_STORY).unwrap();

        let graph = load_from_path(&path).unwrap();

        assert_eq!(graph.len(), 17);
        assert!(matches!(
            load_from_path(&dir.path().join("missing.yaml")),
            Err(StoryError::Io(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_go_is_deterministic(action in "\\PC{0,8}") {
            let graph = gothons();
            for room in graph.rooms() {
                let first = graph.go(room, &action).map(Room::tag);
                let second = graph.go(room, &action).map(Room::tag);
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn prop_go_ignores_case_and_surrounding_whitespace(
            action in "[a-z0-9*]{0,4}",
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
        ) {
            let graph = gothons();
            let padded = format!("{left}{}{right}", action.to_ascii_uppercase());
            for room in graph.rooms() {
                prop_assert_eq!(
                    graph.go(room, &padded).map(Room::tag),
                    graph.go(room, &action).map(Room::tag)
                );
            }
        }

        #[test]
        fn prop_terminal_rooms_never_move(action in "\\PC{0,8}") {
            let graph = gothons();
            for room in graph.rooms().filter(|room| room.is_terminal()) {
                prop_assert!(graph.go(room, &action).is_none());
            }
        }
    }

    #[test]
    fn test_exact_match_wins_over_wildcard_everywhere() {
        let graph = gothons();
        for room in graph.rooms() {
            if !room.transitions().contains_key(crate::WILDCARD) {
                continue;
            }
            for (action, target) in room.transitions() {
                assert_eq!(graph.go(room, action).unwrap().tag(), target);
            }
        }
    }
}

//! Gothon web adventure — story graph.
//!
//! Responsible for the rooms of the story, their bilingual texts, the
//! transition tables between them, and loading the bundled story content.

pub mod content;
pub mod domain;
pub mod error;

pub use domain::graph::{StoryGraph, StoryGraphBuilder};
pub use domain::room::{Localized, Media, Room, WILDCARD, normalize_action};
pub use error::StoryError;

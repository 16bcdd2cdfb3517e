//! Gothon web adventure — game sessions.
//!
//! Responsible for starting games, rendering the current room and applying
//! player actions against a persisted session record.

pub mod application;
pub mod domain;

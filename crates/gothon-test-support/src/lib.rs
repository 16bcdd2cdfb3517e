//! Shared test doubles for the Gothon web adventure.

mod store;

pub use store::{FailingSessionStore, RecordingSessionStore};

//! Domain layer for the story graph.

pub mod graph;
pub mod room;

//! Domain layer for game sessions.

pub mod commands;
pub mod session;

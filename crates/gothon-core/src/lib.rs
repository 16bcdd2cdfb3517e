//! Gothon Core — shared domain abstractions.
//!
//! This crate defines the session record, the language selector, the
//! session store contract and the domain error type that every other crate
//! depends on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod language;
pub mod session;
pub mod store;

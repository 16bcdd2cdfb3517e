//! Session record stores.
//!
//! [`FileSessionStore`] keeps one JSON document per session on disk and is
//! what the server uses by default. [`MemorySessionStore`] keeps records in
//! process memory and forgets them on restart.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;

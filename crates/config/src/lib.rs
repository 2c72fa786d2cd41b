//! Action tree configuration for leaderk.
//!
//! The tree is immutable once loaded: the configuration subsystem owns it and
//! the dispatch core only ever reads it by reference. Structural problems are
//! surfaced here, before a session starts, never during key handling.

mod error;
mod loader;
mod tree;
mod validate;

#[cfg(test)]
mod test_parse;

pub use error::Error;
pub use loader::{default_config_path, load_from_path, load_from_str, resolve_config_path};
pub use tree::{Action, ActionKind, ActionTree, Entry, Group};
pub use validate::{HELP_KEY, ValidationIssue, validate};

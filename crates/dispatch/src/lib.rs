//! Leader-key navigation: the pure state machine at the heart of leaderk.
//!
//! [`State`] consumes logical characters one at a time and resolves them
//! against an immutable [`config::ActionTree`], descending into groups until
//! a leaf action is hit. It performs no side effects: every transition is
//! reported as a [`DispatchResult`] and the effectful layer decides what to
//! do with it.

mod cursor;
mod state;

pub use cursor::Cursor;
pub use state::{DispatchResult, State};

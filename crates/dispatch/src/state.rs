//! The dispatch state machine.

use config::{Action, ActionTree, Entry, Group, HELP_KEY};
use tracing::{debug, trace};

use crate::Cursor;

/// Outcome of handling one logical character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// A group matched; navigation descended into it.
    Descended {
        /// The matched group's key.
        key: char,
        /// The matched group's display label.
        label: String,
    },
    /// A leaf matched; the effectful layer must run it. Navigation has
    /// already been reset.
    Executed(Action),
    /// Nothing matched at the current level. Navigation is untouched so the
    /// user can retry; the caller should signal an invalid-key affordance.
    NoMatch,
    /// Navigation was explicitly cleared (backspace).
    Cleared,
    /// The session was dismissed (escape); the caller hides the overlay.
    Dismissed,
    /// The help key was pressed; the caller shows the cheatsheet. Navigation
    /// is untouched.
    ShowHelp,
}

/// Tracks the logical position within the key hierarchy.
///
/// Two states: idle (no group entered, empty display) and in-group, one per
/// reachable group. There is no terminal state; the machine returns to idle
/// after every executed action or reset and runs for the whole session.
/// Single-writer: exactly one event is processed at a time on the event
/// thread.
#[derive(Debug, Default)]
pub struct State {
    /// Current position within the configured hierarchy.
    cursor: Cursor,
    /// Display string for the overlay; the entered group's key, or empty.
    display: String,
}

impl State {
    /// Create an idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one logical character against the tree.
    ///
    /// The help key is checked before any tree lookup, so it short-circuits
    /// even when an entry is bound to it. Matching is case-sensitive: a
    /// shifted `g` only matches an entry keyed `G`.
    pub fn handle_char(&mut self, tree: &ActionTree, ch: char) -> DispatchResult {
        if ch == HELP_KEY {
            return DispatchResult::ShowHelp;
        }

        match tree.lookup(self.cursor.path(), ch) {
            Some((idx, Entry::Group(group))) => {
                self.cursor.push(idx as u32);
                self.display = group.key.to_string();
                debug!(key = %group.key, depth = self.cursor.depth(), "descended");
                DispatchResult::Descended {
                    key: group.key,
                    label: group.label.clone(),
                }
            }
            Some((_, Entry::Act(action))) => {
                let action = action.clone();
                debug!(key = %action.key, kind = ?action.kind, "matched action");
                self.reset();
                DispatchResult::Executed(action)
            }
            None => {
                trace!(%ch, depth = self.cursor.depth(), "no match");
                DispatchResult::NoMatch
            }
        }
    }

    /// Explicit clear (backspace). Idempotent; always lands in idle.
    pub fn clear(&mut self) -> DispatchResult {
        self.reset();
        DispatchResult::Cleared
    }

    /// Dismiss the session (escape). Idempotent; always lands in idle.
    pub fn dismiss(&mut self) -> DispatchResult {
        self.reset();
        DispatchResult::Dismissed
    }

    /// Return to idle, discarding any partial navigation.
    pub fn reset(&mut self) {
        self.cursor.clear();
        self.display.clear();
    }

    /// Current depth (0 = idle at root).
    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }

    /// The overlay display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Resolve the currently entered group, if any.
    pub fn current_group<'a>(&self, tree: &'a ActionTree) -> Option<&'a Group> {
        tree.group_at(self.cursor.path())
    }
}

//! Leaderk Engine
//!
//! The engine crate turns raw key events into dispatch decisions:
//! - resolves hardware keycodes to logical characters (layout independent)
//! - drives the navigation state machine against the loaded action tree
//! - invokes the [`ActionExecutor`] when a leaf action is hit
//! - recognizes command combinations that bypass the tree entirely
//!
//! It exposes a small API:
//! - [`Engine`]: the primary type you construct and feed events
//! - [`KeyEvent`], [`EngineResponse`], [`AppRequest`]: the event boundary
//! - [`ActionExecutor`]: the side-effect capability supplied by the shell
//!
//! Processing is single-threaded and synchronous: one event is fully handled
//! before the next is accepted, and the engine is the sole writer of its
//! navigation state.

use config::{ActionKind, ActionTree, Group};
use dispatch::{DispatchResult, State};
use mac_keymap::{ControlKey, Scancode};
use tracing::{trace, warn};

mod executor;
pub use executor::ActionExecutor;

/// One raw input event at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A plain key press: hardware keycode plus shift state.
    Key {
        /// Layout-independent hardware keycode.
        code: Scancode,
        /// Whether shift was held.
        shift: bool,
    },
    /// A command/meta combination, identified by its character.
    Command {
        /// The character pressed while the command key was held.
        ch: char,
    },
}

/// Engine-external requests produced by command combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRequest {
    /// Open the settings UI (`cmd+,`).
    OpenSettings,
    /// Close/hide the overlay window (`cmd+w`).
    CloseWindow,
    /// Quit the application (`cmd+q`).
    Quit,
}

/// What the presentation layer should do after one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineResponse {
    /// A dispatch decision: update the label, shake, hide, or show help.
    Dispatch(DispatchResult),
    /// An app-level request that bypassed dispatch entirely.
    App(AppRequest),
}

/// Drives key resolution, navigation state, and action execution.
///
/// Construct with the session's action tree and an executor, then feed
/// [`KeyEvent`]s through [`Engine::handle_event`]. The tree is immutable for
/// the session; [`Engine::set_tree`] swaps it on config reload and resets
/// navigation.
#[derive(Debug)]
pub struct Engine<X> {
    /// The loaded action hierarchy, read-only for the session.
    tree: ActionTree,
    /// Navigation state; this engine is its only writer.
    state: State,
    /// Side-effect capability for executed actions.
    executor: X,
}

impl<X: ActionExecutor> Engine<X> {
    /// Create an engine over a loaded tree.
    pub fn new(tree: ActionTree, executor: X) -> Self {
        Self {
            tree,
            state: State::new(),
            executor,
        }
    }

    /// Replace the action tree (config reload) and reset navigation.
    pub fn set_tree(&mut self, tree: ActionTree) {
        self.tree = tree;
        self.state.reset();
    }

    /// Process one key event to completion.
    pub fn handle_event(&mut self, event: KeyEvent) -> EngineResponse {
        match event {
            KeyEvent::Command { ch } => self.handle_command(ch),
            KeyEvent::Key { code, shift } => self.handle_key(code, shift),
        }
    }

    /// Command combinations short-circuit dispatch and hide the overlay, so
    /// navigation always resets with them.
    fn handle_command(&mut self, ch: char) -> EngineResponse {
        let req = match ch {
            ',' => AppRequest::OpenSettings,
            'w' => AppRequest::CloseWindow,
            'q' => AppRequest::Quit,
            _ => {
                trace!(%ch, "unrecognized command combination");
                return EngineResponse::Dispatch(DispatchResult::NoMatch);
            }
        };
        self.state.reset();
        EngineResponse::App(req)
    }

    /// Resolve and dispatch a plain key press.
    fn handle_key(&mut self, code: Scancode, shift: bool) -> EngineResponse {
        match ControlKey::from_scancode(code) {
            Some(ControlKey::Backspace) => {
                return EngineResponse::Dispatch(self.state.clear());
            }
            Some(ControlKey::Escape) => {
                return EngineResponse::Dispatch(self.state.dismiss());
            }
            _ => {}
        }

        let Some(resolved) = mac_keymap::resolve(code, shift) else {
            // Unmapped codes cannot match any configured key; state is
            // deliberately left alone so the user can retry.
            trace!(code, "unmapped keycode");
            return EngineResponse::Dispatch(DispatchResult::NoMatch);
        };

        let result = self.state.handle_char(&self.tree, resolved.ch);
        if let DispatchResult::Executed(action) = &result {
            if action.kind == ActionKind::Unknown {
                warn!(key = %action.key, value = %action.value, "unknown action kind");
            }
            self.executor.run(action);
        }
        EngineResponse::Dispatch(result)
    }

    /// The overlay display string for the current navigation state.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Current navigation depth (0 = idle).
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// The currently entered group, if any.
    pub fn current_group(&self) -> Option<&Group> {
        self.state.current_group(&self.tree)
    }
}

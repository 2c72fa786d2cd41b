//! mac-keymap: Layout-independent key resolution for macOS.
//!
//! - [`resolve`]: map a hardware keycode plus shift state to a logical
//!   character.
//! - [`ControlKey`]: the handful of non-character keys the dispatch layer
//!   cares about.
//!
//! A "scancode" here is the macOS hardware virtual keycode: the integer
//! reported by `NSEvent.keyCode` (the `kVK_*` constants in
//! `HIToolbox/Events.h`). It identifies a physical key position and never
//! changes with the active input source, which is what lets a leader-key
//! sequence like `o` `s` work identically on a Dvorak or Cyrillic layout.

mod keymap;
pub use keymap::{ResolvedKey, char_for_scancode, resolve};

mod control;
pub use control::ControlKey;

/// macOS hardware virtual keycode (`kVK_*`, `NSEvent.keyCode`).
pub type Scancode = u16;

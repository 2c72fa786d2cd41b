//! Non-character keys recognized by the dispatch layer.

use crate::Scancode;

/// Control keys with fixed hardware codes on macOS.
///
/// Only `Backspace` and `Escape` drive dispatch transitions today; the rest
/// are recognized so callers can swallow them instead of treating them as
/// unmapped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ControlKey {
    /// Return / Enter.
    Return = 36,
    /// Tab.
    Tab = 48,
    /// Space bar.
    Space = 49,
    /// Delete-backward.
    Backspace = 51,
    /// Escape.
    Escape = 53,
}

impl ControlKey {
    /// Look up a `ControlKey` from a scancode.
    pub const fn from_scancode(sc: Scancode) -> Option<Self> {
        match sc {
            36 => Some(Self::Return),
            48 => Some(Self::Tab),
            49 => Some(Self::Space),
            51 => Some(Self::Backspace),
            53 => Some(Self::Escape),
            _ => None,
        }
    }

    /// Returns the scancode for this key.
    pub const fn scancode(self) -> Scancode {
        self as u16
    }
}

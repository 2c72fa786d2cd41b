//! The fixed US-QWERTY character table.
//!
//! The table is a configuration artifact, not an algorithm: 26 letters plus
//! 10 punctuation keys at their US-QWERTY physical positions. Codes outside
//! the table resolve to nothing and the caller treats that as "cannot match
//! anything".

use crate::Scancode;

/// A logical character produced from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedKey {
    /// The logical character, uppercased when shift was held.
    pub ch: char,
    /// Whether shift participated in producing `ch`.
    pub shifted: bool,
}

/// Look up the lowercase character for a scancode.
///
/// Total over the 36 defined codes; `None` for everything else.
pub const fn char_for_scancode(sc: Scancode) -> Option<char> {
    Some(match sc {
        0x00 => 'a',
        0x0B => 'b',
        0x08 => 'c',
        0x02 => 'd',
        0x0E => 'e',
        0x03 => 'f',
        0x05 => 'g',
        0x04 => 'h',
        0x22 => 'i',
        0x26 => 'j',
        0x28 => 'k',
        0x25 => 'l',
        0x2E => 'm',
        0x2D => 'n',
        0x1F => 'o',
        0x23 => 'p',
        0x0C => 'q',
        0x0F => 'r',
        0x01 => 's',
        0x11 => 't',
        0x20 => 'u',
        0x09 => 'v',
        0x0D => 'w',
        0x07 => 'x',
        0x10 => 'y',
        0x06 => 'z',
        0x27 => '\'',
        0x2F => '.',
        0x29 => ';',
        0x2A => '\\',
        0x2C => '/',
        0x21 => '[',
        0x1E => ']',
        0x32 => '`',
        0x2B => ',',
        0x1B => '-',
        _ => return None,
    })
}

/// Resolve a scancode and shift state to a logical character.
///
/// Shift yields the uppercase form of the mapped character; for punctuation
/// uppercasing is the identity, so shift+`/` resolves to `/` (not `?`). Pure
/// and side-effect free.
pub fn resolve(sc: Scancode, shift: bool) -> Option<ResolvedKey> {
    let ch = char_for_scancode(sc)?;
    Some(ResolvedKey {
        ch: if shift { ch.to_ascii_uppercase() } else { ch },
        shifted: shift,
    })
}

//! Blocky 5×5 uppercase font.
//!
//! Each glyph is five row masks, top row first. Within a row, bit 4 is the
//! leftmost column, so the binary literals read like the glyph itself.

use super::{Font, Glyph};

/// A 5×5 glyph stored as five row masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGlyph(pub [u8; 5]);

impl Glyph for RowGlyph {
    const WIDTH: u32 = 5;
    const HEIGHT: u32 = 5;

    fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= Self::WIDTH || row >= Self::HEIGHT {
            return false;
        }
        (self.0[row as usize] >> (Self::WIDTH - 1 - col)) & 1 == 1
    }
}

/// Uppercase letters, digits and a little punctuation in a 5×5 cell.
///
/// Lowercase input is folded to uppercase, so `"Hello"` and `"HELLO"`
/// render the same. This goes beyond a plain table lookup, which would
/// draw lowercase as blanks. Anything else unknown renders as a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x5;

impl Font for Font5x5 {
    type Glyph = RowGlyph;

    fn glyph(&self, c: char) -> &'static RowGlyph {
        let c = c.to_ascii_uppercase();
        GLYPHS
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, glyph)| glyph)
            .unwrap_or(&SPACE)
    }
}

const SPACE: RowGlyph = RowGlyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000]);

#[rustfmt::skip]
static GLYPHS: [(char, RowGlyph); 44] = [
    (' ', SPACE),
    ('A', RowGlyph([0b01110, 0b10001, 0b11111, 0b10001, 0b10001])),
    ('B', RowGlyph([0b11110, 0b10001, 0b11110, 0b10001, 0b11110])),
    ('C', RowGlyph([0b01111, 0b10000, 0b10000, 0b10000, 0b01111])),
    ('D', RowGlyph([0b11100, 0b10010, 0b10001, 0b10010, 0b11100])),
    ('E', RowGlyph([0b11111, 0b10000, 0b11111, 0b10000, 0b11111])),
    ('F', RowGlyph([0b11111, 0b10000, 0b11110, 0b10000, 0b10000])),
    ('G', RowGlyph([0b01111, 0b10000, 0b10011, 0b10001, 0b01111])),
    ('H', RowGlyph([0b10001, 0b10001, 0b11111, 0b10001, 0b10001])),
    ('I', RowGlyph([0b11111, 0b00100, 0b00100, 0b00100, 0b11111])),
    ('J', RowGlyph([0b00111, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', RowGlyph([0b10010, 0b10100, 0b11000, 0b10100, 0b10010])),
    ('L', RowGlyph([0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', RowGlyph([0b10001, 0b11011, 0b10101, 0b10001, 0b10001])),
    ('N', RowGlyph([0b10001, 0b11001, 0b10101, 0b10011, 0b10001])),
    ('O', RowGlyph([0b11111, 0b10001, 0b10001, 0b10001, 0b11111])),
    ('P', RowGlyph([0b11110, 0b10001, 0b11110, 0b10000, 0b10000])),
    ('Q', RowGlyph([0b01110, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', RowGlyph([0b11111, 0b10001, 0b11111, 0b11000, 0b10100])),
    ('S', RowGlyph([0b01111, 0b10000, 0b01110, 0b00001, 0b11110])),
    ('T', RowGlyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', RowGlyph([0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', RowGlyph([0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', RowGlyph([0b10001, 0b10101, 0b10101, 0b10101, 0b11111])),
    ('X', RowGlyph([0b10001, 0b01010, 0b00100, 0b01010, 0b10001])),
    ('Y', RowGlyph([0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
    ('Z', RowGlyph([0b11111, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('0', RowGlyph([0b01110, 0b10011, 0b10101, 0b11001, 0b01110])),
    ('1', RowGlyph([0b00100, 0b01100, 0b00100, 0b00100, 0b01110])),
    ('2', RowGlyph([0b11110, 0b00001, 0b01110, 0b10000, 0b11111])),
    ('3', RowGlyph([0b11110, 0b00001, 0b00110, 0b00001, 0b11110])),
    ('4', RowGlyph([0b10010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', RowGlyph([0b11111, 0b10000, 0b11110, 0b00001, 0b11110])),
    ('6', RowGlyph([0b01110, 0b10000, 0b11110, 0b10001, 0b01110])),
    ('7', RowGlyph([0b11111, 0b00001, 0b00010, 0b00100, 0b00100])),
    ('8', RowGlyph([0b01110, 0b10001, 0b01110, 0b10001, 0b01110])),
    ('9', RowGlyph([0b01110, 0b10001, 0b01111, 0b00001, 0b01110])),
    ('.', RowGlyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00100])),
    (',', RowGlyph([0b00000, 0b00000, 0b00000, 0b00100, 0b01000])),
    (':', RowGlyph([0b00000, 0b00100, 0b00000, 0b00100, 0b00000])),
    ('!', RowGlyph([0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('?', RowGlyph([0b01110, 0b10001, 0b00110, 0b00000, 0b00100])),
    ('-', RowGlyph([0b00000, 0b00000, 0b11111, 0b00000, 0b00000])),
    ('/', RowGlyph([0b00001, 0b00010, 0b00100, 0b01000, 0b10000])),
];

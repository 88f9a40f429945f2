//! Classic 5×7 LCD font covering printable ASCII.
//!
//! Each glyph is five column bytes, leftmost column first; bit 0 of a
//! column is the top row. This matches the SH1106 page layout, so a glyph
//! drawn on a page boundary lands byte-for-byte in the framebuffer.

use super::{Font, Glyph};

/// A 5×7 glyph stored as five column bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGlyph(pub [u8; 5]);

impl Glyph for ColumnGlyph {
    const WIDTH: u32 = 5;
    const HEIGHT: u32 = 7;

    fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= Self::WIDTH || row >= Self::HEIGHT {
            return false;
        }
        (self.0[col as usize] >> row) & 1 == 1
    }
}

/// Printable ASCII (`' '..='~'`) in a 5×7 cell. Anything else renders as
/// `'?'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x7;

const FIRST: char = ' ';
const LAST: char = '~';

impl Font for Font5x7 {
    type Glyph = ColumnGlyph;

    fn glyph(&self, c: char) -> &'static ColumnGlyph {
        let c = if (FIRST..=LAST).contains(&c) { c } else { '?' };
        &GLYPHS[c as usize - FIRST as usize]
    }
}

#[rustfmt::skip]
static GLYPHS: [ColumnGlyph; 95] = [
    ColumnGlyph([0x00, 0x00, 0x00, 0x00, 0x00]), // ' '
    ColumnGlyph([0x00, 0x00, 0x5F, 0x00, 0x00]), // !
    ColumnGlyph([0x00, 0x07, 0x00, 0x07, 0x00]), // "
    ColumnGlyph([0x14, 0x7F, 0x14, 0x7F, 0x14]), // #
    ColumnGlyph([0x24, 0x2A, 0x7F, 0x2A, 0x12]), // $
    ColumnGlyph([0x23, 0x13, 0x08, 0x64, 0x62]), // %
    ColumnGlyph([0x36, 0x49, 0x55, 0x22, 0x50]), // &
    ColumnGlyph([0x00, 0x05, 0x03, 0x00, 0x00]), // '
    ColumnGlyph([0x00, 0x1C, 0x22, 0x41, 0x00]), // (
    ColumnGlyph([0x00, 0x41, 0x22, 0x1C, 0x00]), // )
    ColumnGlyph([0x08, 0x2A, 0x1C, 0x2A, 0x08]), // *
    ColumnGlyph([0x08, 0x08, 0x3E, 0x08, 0x08]), // +
    ColumnGlyph([0x00, 0x50, 0x30, 0x00, 0x00]), // ,
    ColumnGlyph([0x08, 0x08, 0x08, 0x08, 0x08]), // -
    ColumnGlyph([0x00, 0x60, 0x60, 0x00, 0x00]), // .
    ColumnGlyph([0x20, 0x10, 0x08, 0x04, 0x02]), // /
    ColumnGlyph([0x3E, 0x51, 0x49, 0x45, 0x3E]), // 0
    ColumnGlyph([0x00, 0x42, 0x7F, 0x40, 0x00]), // 1
    ColumnGlyph([0x42, 0x61, 0x51, 0x49, 0x46]), // 2
    ColumnGlyph([0x21, 0x41, 0x45, 0x4B, 0x31]), // 3
    ColumnGlyph([0x18, 0x14, 0x12, 0x7F, 0x10]), // 4
    ColumnGlyph([0x27, 0x45, 0x45, 0x45, 0x39]), // 5
    ColumnGlyph([0x3C, 0x4A, 0x49, 0x49, 0x30]), // 6
    ColumnGlyph([0x01, 0x71, 0x09, 0x05, 0x03]), // 7
    ColumnGlyph([0x36, 0x49, 0x49, 0x49, 0x36]), // 8
    ColumnGlyph([0x06, 0x49, 0x49, 0x29, 0x1E]), // 9
    ColumnGlyph([0x00, 0x36, 0x36, 0x00, 0x00]), // :
    ColumnGlyph([0x00, 0x56, 0x36, 0x00, 0x00]), // ;
    ColumnGlyph([0x08, 0x14, 0x22, 0x41, 0x00]), // <
    ColumnGlyph([0x14, 0x14, 0x14, 0x14, 0x14]), // =
    ColumnGlyph([0x00, 0x41, 0x22, 0x14, 0x08]), // >
    ColumnGlyph([0x02, 0x01, 0x51, 0x09, 0x06]), // ?
    ColumnGlyph([0x32, 0x49, 0x79, 0x41, 0x3E]), // @
    ColumnGlyph([0x7E, 0x11, 0x11, 0x11, 0x7E]), // A
    ColumnGlyph([0x7F, 0x49, 0x49, 0x49, 0x36]), // B
    ColumnGlyph([0x3E, 0x41, 0x41, 0x41, 0x22]), // C
    ColumnGlyph([0x7F, 0x41, 0x41, 0x22, 0x1C]), // D
    ColumnGlyph([0x7F, 0x49, 0x49, 0x49, 0x41]), // E
    ColumnGlyph([0x7F, 0x09, 0x09, 0x09, 0x01]), // F
    ColumnGlyph([0x3E, 0x41, 0x49, 0x49, 0x7A]), // G
    ColumnGlyph([0x7F, 0x08, 0x08, 0x08, 0x7F]), // H
    ColumnGlyph([0x00, 0x41, 0x7F, 0x41, 0x00]), // I
    ColumnGlyph([0x20, 0x40, 0x41, 0x3F, 0x01]), // J
    ColumnGlyph([0x7F, 0x08, 0x14, 0x22, 0x41]), // K
    ColumnGlyph([0x7F, 0x40, 0x40, 0x40, 0x40]), // L
    ColumnGlyph([0x7F, 0x02, 0x0C, 0x02, 0x7F]), // M
    ColumnGlyph([0x7F, 0x04, 0x08, 0x10, 0x7F]), // N
    ColumnGlyph([0x3E, 0x41, 0x41, 0x41, 0x3E]), // O
    ColumnGlyph([0x7F, 0x09, 0x09, 0x09, 0x06]), // P
    ColumnGlyph([0x3E, 0x41, 0x51, 0x21, 0x5E]), // Q
    ColumnGlyph([0x7F, 0x09, 0x19, 0x29, 0x46]), // R
    ColumnGlyph([0x46, 0x49, 0x49, 0x49, 0x31]), // S
    ColumnGlyph([0x01, 0x01, 0x7F, 0x01, 0x01]), // T
    ColumnGlyph([0x3F, 0x40, 0x40, 0x40, 0x3F]), // U
    ColumnGlyph([0x1F, 0x20, 0x40, 0x20, 0x1F]), // V
    ColumnGlyph([0x3F, 0x40, 0x38, 0x40, 0x3F]), // W
    ColumnGlyph([0x63, 0x14, 0x08, 0x14, 0x63]), // X
    ColumnGlyph([0x07, 0x08, 0x70, 0x08, 0x07]), // Y
    ColumnGlyph([0x61, 0x51, 0x49, 0x45, 0x43]), // Z
    ColumnGlyph([0x00, 0x7F, 0x41, 0x41, 0x00]), // [
    ColumnGlyph([0x02, 0x04, 0x08, 0x10, 0x20]), // \
    ColumnGlyph([0x00, 0x41, 0x41, 0x7F, 0x00]), // ]
    ColumnGlyph([0x04, 0x02, 0x01, 0x02, 0x04]), // ^
    ColumnGlyph([0x40, 0x40, 0x40, 0x40, 0x40]), // _
    ColumnGlyph([0x00, 0x01, 0x02, 0x04, 0x00]), // `
    ColumnGlyph([0x20, 0x54, 0x54, 0x54, 0x78]), // a
    ColumnGlyph([0x7F, 0x48, 0x44, 0x44, 0x38]), // b
    ColumnGlyph([0x38, 0x44, 0x44, 0x44, 0x20]), // c
    ColumnGlyph([0x38, 0x44, 0x44, 0x48, 0x7F]), // d
    ColumnGlyph([0x38, 0x54, 0x54, 0x54, 0x18]), // e
    ColumnGlyph([0x08, 0x7E, 0x09, 0x01, 0x02]), // f
    ColumnGlyph([0x0C, 0x52, 0x52, 0x52, 0x3E]), // g
    ColumnGlyph([0x7F, 0x08, 0x04, 0x04, 0x78]), // h
    ColumnGlyph([0x00, 0x44, 0x7D, 0x40, 0x00]), // i
    ColumnGlyph([0x20, 0x40, 0x44, 0x3D, 0x00]), // j
    ColumnGlyph([0x7F, 0x10, 0x28, 0x44, 0x00]), // k
    ColumnGlyph([0x00, 0x41, 0x7F, 0x40, 0x00]), // l
    ColumnGlyph([0x7C, 0x04, 0x18, 0x04, 0x78]), // m
    ColumnGlyph([0x7C, 0x08, 0x04, 0x04, 0x78]), // n
    ColumnGlyph([0x38, 0x44, 0x44, 0x44, 0x38]), // o
    ColumnGlyph([0x7C, 0x14, 0x14, 0x14, 0x08]), // p
    ColumnGlyph([0x08, 0x14, 0x14, 0x18, 0x7C]), // q
    ColumnGlyph([0x7C, 0x08, 0x04, 0x04, 0x08]), // r
    ColumnGlyph([0x48, 0x54, 0x54, 0x54, 0x20]), // s
    ColumnGlyph([0x04, 0x3F, 0x44, 0x40, 0x20]), // t
    ColumnGlyph([0x3C, 0x40, 0x40, 0x20, 0x7C]), // u
    ColumnGlyph([0x1C, 0x20, 0x40, 0x20, 0x1C]), // v
    ColumnGlyph([0x3C, 0x40, 0x30, 0x40, 0x3C]), // w
    ColumnGlyph([0x44, 0x28, 0x10, 0x28, 0x44]), // x
    ColumnGlyph([0x0C, 0x50, 0x50, 0x50, 0x3C]), // y
    ColumnGlyph([0x44, 0x64, 0x54, 0x4C, 0x44]), // z
    ColumnGlyph([0x00, 0x08, 0x36, 0x41, 0x00]), // {
    ColumnGlyph([0x00, 0x00, 0x7F, 0x00, 0x00]), // |
    ColumnGlyph([0x00, 0x41, 0x36, 0x08, 0x00]), // }
    ColumnGlyph([0x08, 0x04, 0x08, 0x10, 0x08]), // ~
];

//! Fixed-size bitmap fonts.
//!
//! Two glyph encodings are supported and deliberately kept distinct:
//!
//! | Font        | Cell | Layout       | Bit order                   | Fallback |
//! |-------------|------|--------------|-----------------------------|----------|
//! | [`Font5x5`] | 5×5  | row-major    | bit 4 = leftmost column     | `' '`    |
//! | [`Font5x7`] | 5×7  | column-major | bit 0 = top row             | `'?'`    |
//!
//! Both expose their glyphs through the [`Glyph`] trait, whose single
//! [`is_set`](Glyph::is_set) query is all the renderer needs.

mod font5x5;
mod font5x7;

pub use font5x5::{Font5x5, RowGlyph};
pub use font5x7::{ColumnGlyph, Font5x7};

/// A fixed-size monochrome bitmap.
pub trait Glyph {
    /// Cell width in pixels.
    const WIDTH: u32;
    /// Cell height in pixels.
    const HEIGHT: u32;

    /// `true` if the pixel at (`col`, `row`) of the cell is lit.
    ///
    /// Coordinates outside the cell return `false`.
    fn is_set(&self, col: u32, row: u32) -> bool;
}

/// A static character → glyph mapping.
pub trait Font {
    type Glyph: Glyph + 'static;

    /// Look up `c`, falling back to the font's default glyph on a miss.
    fn glyph(&self, c: char) -> &'static Self::Glyph;
}

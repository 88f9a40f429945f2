//! Text metrics and placement helpers.
//!
//! Fonts here are fixed-width, so a string's extent depends only on its
//! character count, the glyph cell and the inter-glyph spacing.

use embedded_graphics::prelude::{Point, Size};

use crate::font::{Font, Glyph};

/// Pixel width of `text`: `n * (glyph_width + spacing) - spacing`.
///
/// The trailing spacing after the last glyph is not counted. An empty
/// string is 0 wide. Extreme spacings saturate instead of wrapping.
pub fn text_width<F: Font>(_font: &F, text: &str, spacing: i32) -> i32 {
    let count = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    if count == 0 {
        return 0;
    }
    let glyph_width = <F::Glyph as Glyph>::WIDTH as i32;
    (count - 1)
        .saturating_mul(glyph_width.saturating_add(spacing))
        .saturating_add(glyph_width)
}

/// Bounding size of `text` rendered in `font`.
pub fn text_size<F: Font>(font: &F, text: &str, spacing: i32) -> Size {
    let width = text_width(font, text, spacing).max(0) as u32;
    let height = if width == 0 { 0 } else { <F::Glyph as Glyph>::HEIGHT };
    Size::new(width, height)
}

/// Offset that centres an `inner` extent inside an `outer` one.
///
/// Floor division; never negative, so content larger than the display is
/// pinned to the left/top edge.
pub fn centered_offset(outer: i32, inner: i32) -> i32 {
    (outer - inner).div_euclid(2).max(0)
}

/// Top-left origin that centres `content` on a `display`.
pub fn centered_origin(display: Size, content: Size) -> Point {
    Point::new(
        centered_offset(display.width as i32, content.width as i32),
        centered_offset(display.height as i32, content.height as i32),
    )
}

// ── Tests ────────────────────────────────────────────────────────────────

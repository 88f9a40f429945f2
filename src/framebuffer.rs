//! Page-organised 1 bit-per-pixel framebuffer.
//!
//! The layout mirrors SH1106 display RAM: the buffer is `pages = height / 8`
//! bands, each `width` bytes long. Bit `b` of byte `page * width + x` is the
//! pixel at column `x`, row `page * 8 + b` (bit 0 is the top row of the
//! page). A page can therefore be streamed to the controller unchanged.
//!
//! All drawing is clipped: coordinates outside the buffer are ignored
//! without error, so callers can draw near the edges freely.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use heapless::Vec;

use crate::config::{BUFFER_CAPACITY, MAX_HEIGHT, PAGE_HEIGHT, RAM_COLUMNS};
use crate::error::ConfigError;
use crate::font::{Font, Glyph};

/// In-memory image of the display RAM.
///
/// Backed by a fixed-capacity [`heapless::Vec`] sized for the largest
/// controller geometry (132×64), so no allocator is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u8,
    height: u8,
    data: Vec<u8, BUFFER_CAPACITY>,
}

impl FrameBuffer {
    /// Create a zeroed framebuffer.
    ///
    /// # Errors
    /// * [`ConfigError::Width`] if `width` is zero or wider than 132
    /// * [`ConfigError::Height`] if `height` is not a multiple of 8 in `8..=64`
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || width as u16 > RAM_COLUMNS {
            return Err(ConfigError::Width);
        }
        if height == 0 || height % PAGE_HEIGHT != 0 || height > MAX_HEIGHT {
            return Err(ConfigError::Height);
        }

        let len = width as usize * (height / PAGE_HEIGHT) as usize;
        let mut data = Vec::new();
        data.resize(len, 0).map_err(|_| ConfigError::Width)?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of 8-row pages.
    pub fn page_count(&self) -> u8 {
        self.height / PAGE_HEIGHT
    }

    /// The raw buffer, page 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pages, each a `width`-byte slice.
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Byte index and bit for an in-range pixel.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let page = (y >> 3) as usize;
        let bit = (y & 7) as u8;
        Some((page * self.width as usize + x as usize, bit))
    }

    /// Set (`on = true`) or clear a pixel. Out-of-range coordinates are a
    /// no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, bit)) = self.locate(x, y) {
            if on {
                self.data[index] |= 1 << bit;
            } else {
                self.data[index] &= !(1 << bit);
            }
        }
    }

    /// Read a pixel back. `None` if out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, bit)| self.data[index] & (1 << bit) != 0)
    }

    /// Set every pixel on or off.
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        self.data.iter_mut().for_each(|b| *b = byte);
    }

    /// Draw the lit cells of `glyph` with its top-left corner at (`x`, `y`).
    ///
    /// Unlit cells are left untouched, so stale content shows through;
    /// `fill(false)` first when redrawing static text.
    pub fn draw_glyph<G: Glyph>(&mut self, x: i32, y: i32, glyph: &G) {
        self.draw_glyph_colored(x, y, glyph, true);
    }

    /// Like [`draw_glyph`](Self::draw_glyph), but lit cells are written as
    /// `on`. With `on = false` the glyph is cut out of a filled background.
    pub fn draw_glyph_colored<G: Glyph>(&mut self, x: i32, y: i32, glyph: &G, on: bool) {
        for row in 0..G::HEIGHT {
            let Some(py) = y.checked_add(row as i32) else {
                break;
            };
            for col in 0..G::WIDTH {
                let Some(px) = x.checked_add(col as i32) else {
                    break;
                };
                if glyph.is_set(col, row) {
                    self.set_pixel(px, py, on);
                }
            }
        }
    }

    /// Draw `text` left to right starting at (`x`, `y`).
    ///
    /// The cursor advances by the glyph width plus `spacing` per character.
    /// There is no wrapping; whatever runs off the edge is clipped.
    pub fn draw_text<F: Font>(&mut self, text: &str, x: i32, y: i32, font: &F, spacing: i32) {
        self.draw_text_colored(text, x, y, font, spacing, true);
    }

    /// Like [`draw_text`](Self::draw_text), writing lit glyph cells as `on`.
    pub fn draw_text_colored<F: Font>(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: &F,
        spacing: i32,
        on: bool,
    ) {
        let advance = (<F::Glyph as Glyph>::WIDTH as i32).saturating_add(spacing);
        let mut cursor = x;
        for c in text.chars() {
            self.draw_glyph_colored(cursor, y, font.glyph(c), on);
            cursor = match cursor.checked_add(advance) {
                Some(next) => next,
                None => break,
            };
            // Nothing further right can land on the buffer.
            if advance >= 0 && cursor >= self.width as i32 {
                break;
            }
        }
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ── embedded-graphics ────────────────────────────────────────────────────

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    use super::*;
    use crate::font::{Font5x5, Font5x7};

    fn blank() -> FrameBuffer {
        FrameBuffer::new(128, 64).unwrap()
    }

    #[test]
    fn new_buffer_is_zeroed_with_page_layout() {
        let fb = blank();
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.page_count(), 8);
        assert_eq!(fb.pages().count(), 8);
        assert!(fb.pages().all(|p| p.len() == 128));
    }

    #[test]
    fn rejects_invalid_geometry() {
        assert_eq!(FrameBuffer::new(0, 64), Err(ConfigError::Width));
        assert_eq!(FrameBuffer::new(133, 64), Err(ConfigError::Width));
        assert_eq!(FrameBuffer::new(128, 0), Err(ConfigError::Height));
        assert_eq!(FrameBuffer::new(128, 12), Err(ConfigError::Height));
        assert_eq!(FrameBuffer::new(128, 72), Err(ConfigError::Height));
    }

    #[test]
    fn set_pixel_touches_exactly_one_bit() {
        // Sample corners, page boundaries and interior points.
        let points = [
            (0, 0),
            (127, 0),
            (0, 63),
            (127, 63),
            (5, 7),
            (5, 8),
            (64, 31),
            (100, 45),
        ];
        for &(x, y) in &points {
            let mut fb = blank();
            let before = fb.clone();
            fb.set_pixel(x, y, true);

            let index = (y >> 3) as usize * 128 + x as usize;
            let bit = y & 7;
            for (i, (&a, &b)) in before.as_bytes().iter().zip(fb.as_bytes()).enumerate() {
                if i == index {
                    assert_eq!(b, a | (1 << bit));
                } else {
                    assert_eq!(a, b);
                }
            }
            assert_eq!(fb.pixel(x, y), Some(true));
        }
    }

    #[test]
    fn clearing_a_pixel_keeps_neighbours() {
        let mut fb = blank();
        fb.fill(true);
        fb.set_pixel(10, 19, false);
        assert_eq!(fb.as_bytes()[2 * 128 + 10], 0b1111_0111);
        assert_eq!(fb.pixel(10, 19), Some(false));
        assert_eq!(fb.pixel(10, 18), Some(true));
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut fb = blank();
        fb.set_pixel(3, 3, true);
        let before = fb.clone();
        for &(x, y) in &[(-1, 0), (0, -1), (128, 0), (0, 64), (i32::MIN, i32::MAX), (500, 500)] {
            fb.set_pixel(x, y, true);
            fb.set_pixel(x, y, false);
            assert_eq!(fb.pixel(x, y), None);
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn fill_on_then_off() {
        for &(w, h) in &[(128u8, 64u8), (64, 32), (132, 8), (1, 8)] {
            let mut fb = FrameBuffer::new(w, h).unwrap();
            fb.fill(true);
            assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
            fb.fill(false);
            assert_eq!(fb.as_bytes().len(), w as usize * (h as usize / 8));
            assert!(fb.as_bytes().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn empty_text_changes_nothing() {
        let mut fb = blank();
        fb.set_pixel(40, 40, true);
        let before = fb.clone();
        fb.draw_text("", 0, 0, &Font5x5, 1);
        fb.draw_text("", 10, 10, &Font5x7, 3);
        assert_eq!(fb, before);
    }

    #[test]
    fn row_font_letter_a_at_origin() {
        let mut fb = blank();
        fb.draw_text("A", 0, 0, &Font5x5, 1);
        // 'A' rows: 01110 / 10001 / 11111 / 10001 / 10001, transposed to columns.
        assert_eq!(&fb.as_bytes()[..5], &[0x1E, 0x05, 0x05, 0x05, 0x1E]);
        assert!(fb.as_bytes()[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn column_font_letter_a_at_origin() {
        let mut fb = blank();
        fb.draw_text("A", 0, 0, &Font5x7, 1);
        assert_eq!(&fb.as_bytes()[..5], &Font5x7.glyph('A').0);
        assert!(fb.as_bytes()[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn glyph_draws_over_background_without_clearing() {
        let mut fb = blank();
        fb.fill(true);
        fb.draw_glyph(0, 0, Font5x5.glyph(' '));
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn glyph_straddling_a_page_boundary() {
        let mut fb = blank();
        // Full-height column stroke of 'L' from row 5 to row 11.
        fb.draw_glyph(0, 5, Font5x7.glyph('L'));
        assert_eq!(fb.as_bytes()[0], 0b1110_0000);
        assert_eq!(fb.as_bytes()[128], 0b0000_1111);
    }

    #[test]
    fn text_advances_by_width_plus_spacing() {
        let mut fb = blank();
        fb.draw_text("II", 0, 0, &Font5x5, 2);
        // 'I' top row is 11111: first glyph covers x = 0..5, second x = 7..12.
        for x in 0..5 {
            assert_eq!(fb.pixel(x, 0), Some(true));
            assert_eq!(fb.pixel(x + 7, 0), Some(true));
        }
        assert_eq!(fb.pixel(5, 0), Some(false));
        assert_eq!(fb.pixel(6, 0), Some(false));
    }

    #[test]
    fn text_is_clipped_at_the_right_edge() {
        let mut fb = blank();
        fb.draw_text("HH", 124, 0, &Font5x5, 1);
        // Only columns 124..128 of the first 'H' fit.
        assert_eq!(fb.pixel(124, 0), Some(true));
        assert_eq!(fb.pixel(127, 2), Some(true));
        let lit: u32 = fb.as_bytes().iter().map(|b| b.count_ones()).sum();
        // 'H' minus its rightmost column (5 pixels) leaves 8 of 13.
        assert_eq!(lit, 8);
    }

    #[test]
    fn negative_origin_clips_left_and_top() {
        let mut fb = blank();
        fb.draw_glyph(-4, -4, Font5x5.glyph('O'));
        // Only the bottom-right cell of 'O' (row 4, col 4) remains.
        assert_eq!(fb.pixel(0, 0), Some(true));
        let lit: u32 = fb.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 1);
    }

    #[test]
    fn glyphs_near_the_coordinate_limits_are_clipped() {
        let mut fb = blank();
        let glyph = Font5x7.glyph('A');
        fb.draw_glyph(i32::MAX, 0, glyph);
        fb.draw_glyph(0, i32::MAX - 2, glyph);
        fb.draw_glyph(i32::MIN, i32::MIN, glyph);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn text_near_the_coordinate_limits_is_clipped() {
        let mut fb = blank();
        fb.draw_text("AB", i32::MAX - 10, 0, &Font5x5, 1);
        fb.draw_text("AB", 0, i32::MAX - 1, &Font5x7, 1);
        fb.draw_text("AB", i32::MIN + 3, 0, &Font5x5, i32::MIN);
        fb.draw_text("AB", 0, 0, &Font5x5, i32::MAX);
        // Only the first 'A' of the last call lands on the buffer.
        assert_eq!(&fb.as_bytes()[..5], &[0x1E, 0x05, 0x05, 0x05, 0x1E]);
        assert!(fb.as_bytes()[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn text_can_be_cut_out_of_a_filled_background() {
        let mut fb = blank();
        fb.fill(true);
        fb.draw_text_colored("A", 0, 0, &Font5x5, 1, false);
        assert_eq!(&fb.as_bytes()[..5], &[0xE1, 0xFA, 0xFA, 0xFA, 0xE1]);
        assert!(fb.as_bytes()[5..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn draw_target_routes_through_set_pixel() {
        let mut fb = blank();
        Line::new(Point::new(-10, 2), Point::new(200, 2))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.as_bytes()[..128].iter().all(|&b| b == 0b0000_0100));
        assert!(fb.as_bytes()[128..].iter().all(|&b| b == 0));

        fb.clear(BinaryColor::On).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
        assert_eq!(fb.size(), Size::new(128, 64));
    }
}

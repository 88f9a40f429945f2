//! Controller configuration.
//!
//! [`Sh1106Config`] is the only configuration surface of the driver. It is
//! fixed once the driver has been constructed.

use crate::error::ConfigError;

/// Number of columns in the SH1106 display RAM.
///
/// Most panels show 128 of them, which is why a column offset of 2 is
/// common.
pub const RAM_COLUMNS: u16 = 132;

/// Maximum number of rows the controller can multiplex.
pub const MAX_HEIGHT: u8 = 64;

/// Rows per page (one framebuffer byte covers eight vertical pixels).
pub const PAGE_HEIGHT: u8 = 8;

/// Framebuffer capacity for the largest supported geometry.
pub const BUFFER_CAPACITY: usize = RAM_COLUMNS as usize * MAX_HEIGHT as usize / 8;

/// Default 7-bit I2C address (some modules strap to `0x3D`).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Construction-time settings for an SH1106 panel.
///
/// [`Sh1106Config::default()`] matches the common 1.3" 128×64 module:
/// address `0x3C`, column offset 2, mirrored in both axes. Override single
/// fields with struct-update syntax:
///
/// ```
/// use sh1106_oled::Sh1106Config;
///
/// let config = Sh1106Config {
///     col_offset: 0,
///     mirror_vertical: false,
///     ..Sh1106Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sh1106Config {
    /// 7-bit I2C device address.
    pub address: u8,
    /// Visible width in pixels.
    pub width: u8,
    /// Visible height in pixels. Must be a multiple of 8.
    pub height: u8,
    /// First RAM column that maps to the left edge of the panel.
    pub col_offset: u8,
    /// Reverse the segment (column) scan: `0xA1` instead of `0xA0`.
    pub mirror_horizontal: bool,
    /// Reverse the COM (row) scan: `0xC8` instead of `0xC0`.
    pub mirror_vertical: bool,
}

impl Default for Sh1106Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            width: 128,
            height: 64,
            col_offset: 2,
            mirror_horizontal: true,
            mirror_vertical: true,
        }
    }
}

impl Sh1106Config {
    /// Check the geometry and address against the controller limits.
    ///
    /// # Errors
    /// * [`ConfigError::Address`] if `address > 0x7F`
    /// * [`ConfigError::Width`] if `width == 0` or `col_offset + width > 132`
    /// * [`ConfigError::Height`] if `height` is not a multiple of 8 in `8..=64`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::Address);
        }
        if self.width == 0 || self.col_offset as u16 + self.width as u16 > RAM_COLUMNS {
            return Err(ConfigError::Width);
        }
        if self.height == 0 || self.height % PAGE_HEIGHT != 0 || self.height > MAX_HEIGHT {
            return Err(ConfigError::Height);
        }
        Ok(())
    }

    /// Number of 8-row pages.
    pub fn pages(&self) -> u8 {
        self.height / PAGE_HEIGHT
    }

    /// Framebuffer length in bytes: `width * pages`.
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.pages() as usize
    }
}

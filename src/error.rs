//! Error types for the SH1106 driver.

use core::fmt;

/// A configuration value that violates the controller's geometry or
/// addressing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The bus address does not fit in 7 bits.
    Address,
    /// Width is zero, or `col_offset + width` exceeds the 132 RAM columns.
    Width,
    /// Height is zero, not a multiple of 8, or taller than 64 rows.
    Height,
}

/// Errors that can occur while driving the display.
///
/// Generic over the bus error so that the caller's own I2C error type is
/// preserved. Drawing never fails: out-of-range pixels are dropped
/// silently.
#[derive(Debug)]
pub enum Sh1106Error<E> {
    /// Underlying bus write failed (e.g. address not acknowledged).
    Bus(E),

    /// The hardware reset line could not be driven.
    Pin,

    /// The configuration was rejected before any bus traffic.
    Config(ConfigError),
}

// Allow ergonomic `?` propagation from raw bus errors.
impl<E> From<E> for Sh1106Error<E> {
    fn from(error: E) -> Self {
        Sh1106Error::Bus(error)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Address => write!(f, "bus address must be 7-bit"),
            ConfigError::Width => write!(f, "width must be 1..=132 including column offset"),
            ConfigError::Height => write!(f, "height must be a multiple of 8 in 8..=64"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Sh1106Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sh1106Error::Bus(e) => write!(f, "Bus error: {:?}", e),
            Sh1106Error::Pin => write!(f, "Reset pin error"),
            Sh1106Error::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Address => defmt::write!(f, "Invalid address"),
            ConfigError::Width => defmt::write!(f, "Invalid width"),
            ConfigError::Height => defmt::write!(f, "Invalid height"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Sh1106Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Sh1106Error::Bus(e) => defmt::write!(f, "Bus error: {}", e),
            Sh1106Error::Pin => defmt::write!(f, "Reset pin error"),
            Sh1106Error::Config(e) => defmt::write!(f, "Invalid configuration: {}", e),
        }
    }
}

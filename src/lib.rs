//! Blocking I2C driver for SH1106 monochrome OLED controllers.
//!
//! This crate provides [`Sh1106`], a driver that owns a page-organised
//! framebuffer and streams it to the controller, plus two small bitmap
//! fonts ([`Font5x5`], [`Font5x7`]) for drawing text without pulling in a
//! full graphics stack. The driver also implements `embedded-graphics`'
//! [`DrawTarget`], so any `embedded-graphics` drawable works too.
//!
//! # Quick Start
//!
//! ```ignore
//! use sh1106_oled::{layout, wait_for_bus, ExclusiveBus, Font5x5, Sh1106, Sh1106Config};
//!
//! let mut bus = ExclusiveBus::new(i2c);
//! wait_for_bus(&mut bus, &mut delay, sh1106_oled::bus::PROBE_TIMEOUT_MS);
//!
//! let mut oled = Sh1106::new(bus, Sh1106Config::default(), &mut delay)?;
//!
//! let text = "HELLO WORLD";
//! let size = layout::text_size(&Font5x5, text, 1);
//! let origin = layout::centered_origin(oled.size(), size);
//!
//! oled.fill(false);
//! oled.draw_text(text, origin.x, origin.y, &Font5x5, 1);
//! oled.show()?;
//! ```
//!
//! # Bus sharing
//!
//! Bring-up and every [`show()`](Sh1106::show) run under an exclusive
//! [`LockableBus`] lock that is released on every exit path. Use
//! [`ExclusiveBus`] when the display owns the I2C peripheral, or
//! `BusArbiter` to share one peripheral with other devices.
//!
//! # Crate Features
//!
//! - **`shared-bus`** *(default)* — `BusArbiter` / `SharedBus`, backed by an
//!   `embassy-sync` critical-section mutex.
//! - **`defmt`** — structured logging via [`defmt`] and `defmt::Format`
//!   implementations on the public types.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![no_std]

pub mod bus;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod layout;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bus::{wait_for_bus, BusGuard, ExclusiveBus, LockableBus};
#[cfg(feature = "shared-bus")]
pub use bus::{BusArbiter, SharedBus};
pub use config::{Sh1106Config, DEFAULT_ADDRESS};
pub use driver::{DriverState, Sh1106};
pub use error::{ConfigError, Sh1106Error};
pub use font::{ColumnGlyph, Font, Font5x5, Font5x7, Glyph, RowGlyph};
pub use framebuffer::FrameBuffer;

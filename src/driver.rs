//! Core SH1106 driver.
//!
//! [`Sh1106`] owns the bus handle, the configuration and the framebuffer.
//! Construction performs the whole bring-up (optional reset pulse, command
//! sequence, blank frame), so a value of this type is always ready to draw
//! and flush.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bus::{BusGuard, LockableBus};
use crate::command::{self, Command, CONTROL_DATA, MAX_DATA_CHUNK};
use crate::config::Sh1106Config;
use crate::error::Sh1106Error;
use crate::font::{Font, Glyph};
use crate::framebuffer::FrameBuffer;

/// Reset line high/low hold time before the final release, in ms.
const RESET_PULSE_MS: u32 = 10;
/// Time the controller needs after reset is released, in ms.
const RESET_RECOVERY_MS: u32 = 50;
/// Panel settle time after the display-on command, in ms.
const POWER_ON_SETTLE_MS: u32 = 20;

/// Lifecycle of a driver.
///
/// `Uninitialized → Initializing → Ready`. Constructors only ever return a
/// `Ready` driver; a failure during bring-up drops the half-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    Uninitialized,
    Initializing,
    Ready,
}

/// Blocking driver for an SH1106 OLED controller on I2C.
///
/// # Lifecycle
///
/// 1. [`Sh1106::new()`] or [`Sh1106::new_with_reset()`] — validates the
///    configuration, optionally pulses the reset line, sends the bring-up
///    sequence and pushes a blank frame.
/// 2. Draw into the framebuffer with [`set_pixel()`](Self::set_pixel),
///    [`draw_text()`](Self::draw_text) or any `embedded-graphics` drawable.
/// 3. [`Sh1106::show()`] — transfers the framebuffer to display RAM.
///
/// # Example
///
/// ```ignore
/// use sh1106_oled::{ExclusiveBus, Font5x5, Sh1106, Sh1106Config};
///
/// let mut oled = Sh1106::new(ExclusiveBus::new(i2c), Sh1106Config::default(), &mut delay)?;
/// oled.fill(false);
/// oled.draw_text("HELLO", 0, 0, &Font5x5, 1);
/// oled.show()?;
/// ```
pub struct Sh1106<BUS> {
    bus: BUS,
    config: Sh1106Config,
    buffer: FrameBuffer,
    state: DriverState,
}

impl<BUS> Sh1106<BUS>
where
    BUS: LockableBus,
{
    /// Bring up a display that has no reset line wired.
    ///
    /// # Arguments
    /// * `bus` — lockable bus the controller sits on.
    /// * `config` — geometry, address and mirroring.
    /// * `delay` — used for the post-init settle time.
    ///
    /// # Errors
    /// * [`Sh1106Error::Config`] if `config` is rejected (no bus traffic)
    /// * [`Sh1106Error::Bus`] if any bring-up or clear write fails
    pub fn new<D: DelayNs>(
        bus: BUS,
        config: Sh1106Config,
        delay: &mut D,
    ) -> Result<Self, Sh1106Error<BUS::Error>> {
        let mut driver = Self::uninitialized(bus, config)?;
        driver.init(delay)?;
        Ok(driver)
    }

    /// Bring up a display, pulsing its reset line first.
    ///
    /// The pulse (high 10 ms, low 10 ms, high 50 ms) runs with the bus
    /// locked and completes before any command is sent.
    ///
    /// # Errors
    /// As [`new()`](Self::new), plus [`Sh1106Error::Pin`] if the reset line
    /// cannot be driven.
    pub fn new_with_reset<RST, D>(
        bus: BUS,
        config: Sh1106Config,
        reset: &mut RST,
        delay: &mut D,
    ) -> Result<Self, Sh1106Error<BUS::Error>>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        let mut driver = Self::uninitialized(bus, config)?;
        driver.hardware_reset(reset, delay)?;
        driver.init(delay)?;
        Ok(driver)
    }

    fn uninitialized(bus: BUS, config: Sh1106Config) -> Result<Self, Sh1106Error<BUS::Error>> {
        config.validate().map_err(Sh1106Error::Config)?;
        let buffer = FrameBuffer::new(config.width, config.height).map_err(Sh1106Error::Config)?;

        Ok(Self {
            bus,
            config,
            buffer,
            state: DriverState::Uninitialized,
        })
    }

    fn hardware_reset<RST, D>(
        &mut self,
        reset: &mut RST,
        delay: &mut D,
    ) -> Result<(), Sh1106Error<BUS::Error>>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("SH1106 hardware reset");

        let _bus = BusGuard::acquire(&mut self.bus);
        reset.set_high().map_err(|_| Sh1106Error::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        reset.set_low().map_err(|_| Sh1106Error::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        reset.set_high().map_err(|_| Sh1106Error::Pin)?;
        delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }

    /// Send the bring-up sequence, then clear display RAM.
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Sh1106Error<BUS::Error>> {
        self.state = DriverState::Initializing;

        #[cfg(feature = "defmt")]
        defmt::debug!("SH1106 init at {=u8:#x}: {}", self.config.address, self.config);

        {
            let mut bus = BusGuard::acquire(&mut self.bus);
            for cmd in command::init_sequence(&self.config) {
                write_command(&mut bus, self.config.address, cmd)?;
            }
            delay.delay_ms(POWER_ON_SETTLE_MS);
        } // ← bus released here, also on the error path above

        self.buffer.fill(false);
        self.show()?;
        self.state = DriverState::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!("SH1106 ready");

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Transfer
    // -----------------------------------------------------------------------

    /// Transfer the framebuffer to display RAM.
    ///
    /// For each page: set the page address and the column offset, then
    /// stream the page in data writes of at most 16 bytes. The bus is
    /// locked for the whole frame.
    ///
    /// # Errors
    /// Returns [`Sh1106Error::Bus`] on the first failed write. Pages already
    /// sent stay on the panel; nothing is retried.
    pub fn show(&mut self) -> Result<(), Sh1106Error<BUS::Error>> {
        let address = self.config.address;
        let col_offset = self.config.col_offset;

        let mut bus = BusGuard::acquire(&mut self.bus);
        for (page, line) in self.buffer.pages().enumerate() {
            for cmd in command::page_start(page as u8, col_offset) {
                write_command(&mut bus, address, cmd)?;
            }
            for chunk in line.chunks(MAX_DATA_CHUNK) {
                write_data(&mut bus, address, chunk)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Display control
    // -----------------------------------------------------------------------

    /// Set the panel contrast (`0x00`–`0xFF`, bring-up uses `0x7F`).
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Sh1106Error<BUS::Error>> {
        self.send(Command::Contrast(level))
    }

    /// Switch the panel on or off. Display RAM is retained while off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Sh1106Error<BUS::Error>> {
        self.send(Command::DisplayOn(on))
    }

    /// Invert every pixel in hardware without touching the framebuffer.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Sh1106Error<BUS::Error>> {
        self.send(Command::Inverted(inverted))
    }

    fn send(&mut self, cmd: Command) -> Result<(), Sh1106Error<BUS::Error>> {
        let mut bus = BusGuard::acquire(&mut self.bus);
        write_command(&mut bus, self.config.address, cmd)?;
        Ok(())
    }
}

impl<BUS> Sh1106<BUS> {
    // -----------------------------------------------------------------------
    // Framebuffer access (no bus traffic)
    // -----------------------------------------------------------------------

    /// Set or clear one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    /// Read one pixel back from the framebuffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.buffer.pixel(x, y)
    }

    /// Set every pixel on or off.
    pub fn fill(&mut self, on: bool) {
        self.buffer.fill(on);
    }

    /// Draw the lit cells of `glyph` at (`x`, `y`).
    pub fn draw_glyph<G: Glyph>(&mut self, x: i32, y: i32, glyph: &G) {
        self.buffer.draw_glyph(x, y, glyph);
    }

    /// Draw `text` at (`x`, `y`), advancing `glyph_width + spacing` per
    /// character.
    pub fn draw_text<F: Font>(&mut self, text: &str, x: i32, y: i32, font: &F, spacing: i32) {
        self.buffer.draw_text(text, x, y, font, spacing);
    }

    /// Draw `text` with its lit cells written as `on`, e.g. dark text on a
    /// filled background.
    pub fn draw_text_colored<F: Font>(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: &F,
        spacing: i32,
        on: bool,
    ) {
        self.buffer.draw_text_colored(text, x, y, font, spacing, on);
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Direct access to the framebuffer, e.g. to hand it to code that only
    /// knows about [`FrameBuffer`]. Changes reach the panel on the next
    /// [`show()`](Sh1106::show).
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    pub fn config(&self) -> &Sh1106Config {
        &self.config
    }

    /// Current lifecycle state. Always [`DriverState::Ready`] for a driver
    /// obtained from a constructor.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Consume the driver and give the bus back.
    pub fn release(self) -> BUS {
        self.bus
    }
}

fn write_command<B: LockableBus>(
    bus: &mut BusGuard<'_, B>,
    address: u8,
    cmd: Command,
) -> Result<(), B::Error> {
    bus.write(address, cmd.encode().as_bytes())
}

fn write_data<B: LockableBus>(
    bus: &mut BusGuard<'_, B>,
    address: u8,
    chunk: &[u8],
) -> Result<(), B::Error> {
    let mut frame = [0u8; MAX_DATA_CHUNK + 1];
    frame[0] = CONTROL_DATA;
    frame[1..=chunk.len()].copy_from_slice(chunk);
    bus.write(address, &frame[..=chunk.len()])
}

// ── embedded-graphics ────────────────────────────────────────────────────

impl<BUS> OriginDimensions for Sh1106<BUS> {
    fn size(&self) -> Size {
        self.buffer.size()
    }
}

impl<BUS> DrawTarget for Sh1106<BUS> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.clear(color)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

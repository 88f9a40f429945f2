//! SH1106 command set and wire framing.
//!
//! Every I2C write to the controller starts with a control byte:
//! - `0x00`: the remaining bytes are a command stream.
//! - `0x40`: the remaining bytes are display RAM data.
//!
//! A [`Command`] encodes to exactly one command transaction
//! (`[0x00, opcode, argument?]`).

use crate::config::Sh1106Config;

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Control byte prefixing a command transaction.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefixing a display RAM data transaction.
pub const CONTROL_DATA: u8 = 0x40;

/// Maximum number of RAM bytes sent in one data transaction.
///
/// Several I2C peripherals cap the payload of a single write; 16 bytes
/// (17 with the control byte) is accepted everywhere we have tried.
pub const MAX_DATA_CHUNK: usize = 16;

// ---------------------------------------------------------------------------
// Opcodes
// ---------------------------------------------------------------------------

pub const SET_COLUMN_LOW: u8 = 0x00;
pub const SET_COLUMN_HIGH: u8 = 0x10;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_SEGMENT_REMAP: u8 = 0xA0;
pub const ENTIRE_DISPLAY_ON: u8 = 0xA4;
pub const SET_INVERTED: u8 = 0xA6;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const SET_DCDC: u8 = 0xAD;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_PAGE_ADDRESS: u8 = 0xB0;
pub const COM_SCAN_NORMAL: u8 = 0xC0;
pub const COM_SCAN_REVERSED: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_CLOCK_DIVIDER: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOMH: u8 = 0xDB;

// ---------------------------------------------------------------------------
// Bring-up values
// ---------------------------------------------------------------------------

/// Divide ratio 1, oscillator frequency +15%.
pub const CLOCK_DIVIDER_DEFAULT: u8 = 0x80;
/// DC-DC converter mode byte with the enable bit clear.
pub const DCDC_MODE_BASE: u8 = 0x8A;
/// Alternative COM pin configuration used by 64-row panels.
pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
pub const CONTRAST_DEFAULT: u8 = 0x7F;
/// Pre-charge 1 DCLK, discharge 15 DCLKs.
pub const PRECHARGE_DEFAULT: u8 = 0xF1;
pub const VCOMH_DEFAULT: u8 = 0x40;

/// A single SH1106 command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `0xAF` (on) / `0xAE` (off).
    DisplayOn(bool),
    /// `0xD5, divider`.
    ClockDivider(u8),
    /// `0xA8, ratio` where `ratio = rows - 1`.
    Multiplex(u8),
    /// `0xD3, offset`.
    DisplayOffset(u8),
    /// `0x40 | line`.
    StartLine(u8),
    /// `0xAD, 0x8B` (on) / `0xAD, 0x8A` (off).
    DcDc(bool),
    /// `0xA1` (mirrored) / `0xA0`.
    SegmentRemap(bool),
    /// `0xC8` (reversed) / `0xC0`.
    ComScanReversed(bool),
    /// `0xDA, config`.
    ComPins(u8),
    /// `0x81, level`.
    Contrast(u8),
    /// `0xD9, periods`.
    PreCharge(u8),
    /// `0xDB, level`.
    VcomhDeselect(u8),
    /// `0xA5` (all pixels lit) / `0xA4` (follow RAM).
    EntireDisplayOn(bool),
    /// `0xA7` (inverted) / `0xA6`.
    Inverted(bool),
    /// `0xB0 + page`.
    PageAddress(u8),
    /// `0x00 | (column & 0x0F)`.
    ColumnLow(u8),
    /// `0x10 | ((column >> 4) & 0x0F)`.
    ColumnHigh(u8),
}

/// A command transaction ready to be written: control byte plus up to two
/// command bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: [u8; 3],
    len: usize,
}

impl CommandFrame {
    fn one(opcode: u8) -> Self {
        Self {
            bytes: [CONTROL_COMMAND, opcode, 0],
            len: 2,
        }
    }

    fn two(opcode: u8, argument: u8) -> Self {
        Self {
            bytes: [CONTROL_COMMAND, opcode, argument],
            len: 3,
        }
    }

    /// Bytes to hand to the bus, control byte included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Command {
    /// Encode into a single command transaction.
    pub fn encode(self) -> CommandFrame {
        match self {
            Command::DisplayOn(on) => CommandFrame::one(if on { DISPLAY_ON } else { DISPLAY_OFF }),
            Command::ClockDivider(d) => CommandFrame::two(SET_CLOCK_DIVIDER, d),
            Command::Multiplex(r) => CommandFrame::two(SET_MULTIPLEX, r),
            Command::DisplayOffset(o) => CommandFrame::two(SET_DISPLAY_OFFSET, o),
            Command::StartLine(l) => CommandFrame::one(SET_START_LINE | (l & 0x3F)),
            Command::DcDc(on) => CommandFrame::two(SET_DCDC, DCDC_MODE_BASE | on as u8),
            Command::SegmentRemap(m) => CommandFrame::one(SET_SEGMENT_REMAP | m as u8),
            Command::ComScanReversed(r) => {
                CommandFrame::one(if r { COM_SCAN_REVERSED } else { COM_SCAN_NORMAL })
            }
            Command::ComPins(c) => CommandFrame::two(SET_COM_PINS, c),
            Command::Contrast(c) => CommandFrame::two(SET_CONTRAST, c),
            Command::PreCharge(p) => CommandFrame::two(SET_PRECHARGE, p),
            Command::VcomhDeselect(v) => CommandFrame::two(SET_VCOMH, v),
            Command::EntireDisplayOn(on) => CommandFrame::one(ENTIRE_DISPLAY_ON | on as u8),
            Command::Inverted(i) => CommandFrame::one(SET_INVERTED | i as u8),
            Command::PageAddress(p) => CommandFrame::one(SET_PAGE_ADDRESS + (p & 0x0F)),
            Command::ColumnLow(c) => CommandFrame::one(SET_COLUMN_LOW | (c & 0x0F)),
            Command::ColumnHigh(c) => CommandFrame::one(SET_COLUMN_HIGH | ((c >> 4) & 0x0F)),
        }
    }
}

/// Number of commands in the bring-up sequence.
pub const INIT_SEQUENCE_LEN: usize = 15;

/// The power-on command sequence for `config`.
///
/// Order and values are fixed by the controller; only the two mirror flags
/// and the multiplex ratio depend on the configuration.
pub fn init_sequence(config: &Sh1106Config) -> [Command; INIT_SEQUENCE_LEN] {
    [
        Command::DisplayOn(false),
        Command::ClockDivider(CLOCK_DIVIDER_DEFAULT),
        Command::Multiplex(config.height - 1),
        Command::DisplayOffset(0),
        Command::StartLine(0),
        Command::DcDc(true),
        Command::SegmentRemap(config.mirror_horizontal),
        Command::ComScanReversed(config.mirror_vertical),
        Command::ComPins(COM_PINS_ALTERNATIVE),
        Command::Contrast(CONTRAST_DEFAULT),
        Command::PreCharge(PRECHARGE_DEFAULT),
        Command::VcomhDeselect(VCOMH_DEFAULT),
        Command::EntireDisplayOn(false),
        Command::Inverted(false),
        Command::DisplayOn(true),
    ]
}

/// The three commands that position the RAM pointer at the start of `page`.
pub fn page_start(page: u8, col_offset: u8) -> [Command; 3] {
    [
        Command::PageAddress(page),
        Command::ColumnLow(col_offset),
        Command::ColumnHigh(col_offset),
    ]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn flatten(commands: &[Command]) -> Vec<Vec<u8>> {
        commands
            .iter()
            .map(|c| c.encode().as_bytes().to_vec())
            .collect()
    }

    #[test]
    fn init_sequence_mirrored_128x64() {
        let frames = flatten(&init_sequence(&Sh1106Config::default()));
        let expected: [&[u8]; INIT_SEQUENCE_LEN] = [
            &[0x00, 0xAE],
            &[0x00, 0xD5, 0x80],
            &[0x00, 0xA8, 0x3F],
            &[0x00, 0xD3, 0x00],
            &[0x00, 0x40],
            &[0x00, 0xAD, 0x8B],
            &[0x00, 0xA1],
            &[0x00, 0xC8],
            &[0x00, 0xDA, 0x12],
            &[0x00, 0x81, 0x7F],
            &[0x00, 0xD9, 0xF1],
            &[0x00, 0xDB, 0x40],
            &[0x00, 0xA4],
            &[0x00, 0xA6],
            &[0x00, 0xAF],
        ];
        assert_eq!(frames.len(), expected.len());
        for (got, want) in frames.iter().zip(expected.iter()) {
            assert_eq!(got.as_slice(), *want);
        }
    }

    #[test]
    fn init_sequence_follows_mirror_flags_and_height() {
        let config = Sh1106Config {
            height: 32,
            mirror_horizontal: false,
            mirror_vertical: false,
            ..Sh1106Config::default()
        };
        let seq = init_sequence(&config);
        assert_eq!(seq[2].encode().as_bytes(), &[0x00, 0xA8, 0x1F]);
        assert_eq!(seq[6].encode().as_bytes(), &[0x00, 0xA0]);
        assert_eq!(seq[7].encode().as_bytes(), &[0x00, 0xC0]);
    }

    #[test]
    fn page_start_splits_column_offset_into_nibbles() {
        let frames = flatten(&page_start(3, 0x2A));
        assert_eq!(frames[0], [0x00, 0xB3]);
        assert_eq!(frames[1], [0x00, 0x0A]);
        assert_eq!(frames[2], [0x00, 0x12]);
    }

    #[test]
    fn runtime_control_commands() {
        assert_eq!(Command::Contrast(0x20).encode().as_bytes(), &[0x00, 0x81, 0x20]);
        assert_eq!(Command::Inverted(true).encode().as_bytes(), &[0x00, 0xA7]);
        assert_eq!(Command::EntireDisplayOn(true).encode().as_bytes(), &[0x00, 0xA5]);
        assert_eq!(Command::DcDc(false).encode().as_bytes(), &[0x00, 0xAD, 0x8A]);
    }
}

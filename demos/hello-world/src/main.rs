//! Hello World example
//!
//! Brings up a 1.3" SH1106 module and shows "HELLO WORLD" centred in the
//! 5×5 font with 1 px letter spacing, then idles.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                          |
//! |-----------|------------|--------------------------------|
//! | I2C0 SDA  | GP0        |                                |
//! | I2C0 SCL  | GP1        |                                |
//! | OLED RST  | —          | Not wired on most modules      |
//! | OLED VCC  | 3V3        |                                |
//! | OLED GND  | GND        |                                |
//!
//! # Panel tunables
//!
//! If the image is shifted horizontally, try `col_offset` 0 or 4. If it is
//! upside down or mirrored, flip the two mirror flags. Some modules answer
//! on `0x3D` instead of `0x3C`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Timer};
use embedded_graphics::prelude::OriginDimensions;
use {defmt_rtt as _, panic_probe as _};

use sh1106_oled::bus::PROBE_TIMEOUT_MS;
use sh1106_oled::{layout, wait_for_bus, ExclusiveBus, Font5x5, Sh1106, Sh1106Config};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

const TEXT: &str = "HELLO WORLD";
const SPACING: i32 = 1;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Hello world example starting");

    // 100 kHz is the most forgiving rate for long jumper wires.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 100_000;

    // --- I2C bus (GP0 = SDA, GP1 = SCL) ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config);
    let mut bus = ExclusiveBus::new(i2c);
    let mut delay = Delay;

    if !wait_for_bus(&mut bus, &mut delay, PROBE_TIMEOUT_MS) {
        warn!("I2C bus not ready, trying anyway");
    }

    let config = Sh1106Config {
        col_offset: 2,
        mirror_horizontal: true,
        mirror_vertical: true,
        ..Sh1106Config::default()
    };

    let mut oled = Sh1106::new(bus, config, &mut delay).expect("OLED init failed");
    info!("OLED initialised");

    let size = layout::text_size(&Font5x5, TEXT, SPACING);
    let origin = layout::centered_origin(oled.size(), size);

    oled.fill(false);
    oled.draw_text(TEXT, origin.x, origin.y, &Font5x5, SPACING);
    if let Err(e) = oled.show() {
        error!("Flush failed: {}", e);
    }

    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}

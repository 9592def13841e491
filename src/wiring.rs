// This module handles board-specific pin mappings.
// Chip profiles are selected via Cargo features ("esp32", "esp32s3").
//! The following wiring is assumed on the classic ESP32 (VSPI):
//! - LCD SCK  => GPIO18
//! - LCD MOSI => GPIO23
//! - LCD CS   => GPIO5
//! - LCD A0 (D/C) => GPIO13
//! - LCD RST  => EN (resets together with the ESP32)
//! - LCD LED  => 3.3V
//! - GND => GND, VCC => 3.3V

use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};
use esp_hal::peripherals::Peripherals;

#[cfg(feature = "esp32")]
pub type LcdSpi<'a> = esp_hal::peripherals::SPI3<'a>;

#[cfg(feature = "esp32s3")]
pub type LcdSpi<'a> = esp_hal::peripherals::SPI2<'a>;

/// Everything the display bring-up takes ownership of.
pub struct DisplayPins<'a> {
    pub spi: LcdSpi<'a>,
    pub sck: AnyPin<'a>,
    pub mosi: AnyPin<'a>,
    pub lcd_cs: Output<'a>,
    pub lcd_dc: Output<'a>,
}

// Default profile: classic ESP32 on VSPI
#[cfg(feature = "esp32")]
pub fn init_board_pins<'a>(p: Peripherals) -> DisplayPins<'a> {
    // CS idles high, D/C starts in command mode
    let lcd_cs = Output::new(p.GPIO5, Level::High, OutputConfig::default());
    let lcd_dc = Output::new(p.GPIO13, Level::Low, OutputConfig::default());

    DisplayPins {
        spi: p.SPI3,
        sck: p.GPIO18.into(),
        mosi: p.GPIO23.into(),
        lcd_cs,
        lcd_dc,
    }
}

// ESP32-S3 devkit, same pins as the GC9A01 breakout used before
#[cfg(feature = "esp32s3")]
pub fn init_board_pins<'a>(p: Peripherals) -> DisplayPins<'a> {
    let lcd_cs = Output::new(p.GPIO9, Level::High, OutputConfig::default());
    let lcd_dc = Output::new(p.GPIO8, Level::Low, OutputConfig::default());

    DisplayPins {
        spi: p.SPI2,
        sck: p.GPIO10.into(),
        mosi: p.GPIO11.into(),
        lcd_cs,
        lcd_dc,
    }
}

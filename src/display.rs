//! Display setup and initialization module.
//
// - SPI in Mode 0 at the panel profile's clock, CS handled by ExclusiveDevice.
// - ST7735 through mipidsi (D/C pin, no reset pin: RST is tied to EN).
// - Size, offset, colour order and inversion come from `config::PANEL`.

use core::fmt;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_hal::delay::DelayNs;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    spi::master::{Config as SpiConfig, ConfigError, Spi},
    spi::Mode,
    time::Rate,
};
use mipidsi::{
    interface::SpiInterface,
    models::ST7735s,
    options::{ColorInversion, ColorOrder},
    Builder as DisplayBuilder,
};

use crate::config::PANEL;
use crate::error::SetupError;
use crate::wiring::DisplayPins;

/// Bring up SPI and the panel, then blank it.
///
/// `buf` is mipidsi's staging buffer; pixels are batched there before each
/// SPI write, so bigger means fewer transactions.
pub fn setup_display<'a, Dl: DelayNs>(
    pins: DisplayPins<'a>,
    buf: &'a mut [u8],
    delay: &mut Dl,
) -> Result<
    impl DrawTarget<Color = Rgb565, Error: fmt::Debug> + 'a,
    SetupError<ConfigError, impl fmt::Debug, impl fmt::Debug>,
> {
    let DisplayPins {
        spi,
        sck,
        mosi,
        lcd_cs,
        lcd_dc,
    } = pins;

    let spi_cfg = SpiConfig::default()
        .with_frequency(Rate::from_hz(PANEL.spi_hz))
        .with_mode(Mode::_0);

    let spi = Spi::new(spi, spi_cfg)
        .map_err(SetupError::SpiConfig)?
        .with_sck(sck).with_mosi(mosi);

    // SPI device + DisplayInterface (needs D/C and a buffer)
    // GPIO outputs can't fail, so neither can taking the CS pin
    let spi_dev = match ExclusiveDevice::new(spi, lcd_cs, NoDelay) {
        Ok(dev) => dev,
        Err(e) => match e {},
    };
    let di = SpiInterface::new(spi_dev, lcd_dc, buf);

    let color_order = if PANEL.bgr { ColorOrder::Bgr } else { ColorOrder::Rgb };
    let inversion = if PANEL.inverted {
        ColorInversion::Inverted
    } else {
        ColorInversion::Normal
    };

    let mut display = DisplayBuilder::new(ST7735s, di)
        .display_size(PANEL.width, PANEL.height)
        .display_offset(PANEL.offset_x, PANEL.offset_y)
        .color_order(color_order)
        .invert_colors(inversion)
        .init(delay)
        .map_err(SetupError::PanelInit)?;

    // Controller RAM holds noise after power-up
    display
        .clear(Rgb565::BLACK)
        .map_err(SetupError::PanelWrite)?;

    Ok(display)
}

//! Panel profiles.
//!
//! The ST7735 ships on a few different glass sizes. Pick the profile with a
//! Cargo feature:
//! - default: 1.8" 128x160, BGR, no inversion
//! - `st7735-80x160`: 0.96" 80x160, BGR, inverted, RAM window offset (26, 1)

/// Everything the display bring-up needs to know about the glass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    pub width: u16,
    pub height: u16,
    /// Where the visible area starts inside the controller's 132x162 RAM
    pub offset_x: u16,
    pub offset_y: u16,
    pub bgr: bool,
    pub inverted: bool,
    pub spi_hz: u32,
}

pub const ST7735_128X160: PanelConfig = PanelConfig {
    width: 128,
    height: 160,
    offset_x: 0,
    offset_y: 0,
    bgr: true,
    inverted: false,
    spi_hz: 26_000_000,
};

pub const ST7735_80X160: PanelConfig = PanelConfig {
    width: 80,
    height: 160,
    offset_x: 26,
    offset_y: 1,
    bgr: true,
    inverted: true,
    spi_hz: 26_000_000,
};

#[cfg(not(feature = "st7735-80x160"))]
pub const PANEL: PanelConfig = ST7735_128X160;

#[cfg(feature = "st7735-80x160")]
pub const PANEL: PanelConfig = ST7735_80X160;

// Bytes mipidsi may batch before flushing to SPI
pub const SPI_STAGING_BUF: usize = 512;

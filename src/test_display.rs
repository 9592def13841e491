//! Host-side stand-ins for the panel and the delay provider.
//!
//! `MockDisplay` panics when a pixel is drawn twice, which doesn't work for
//! demos that clear the screen and then draw on top. `TestDisplay` is a plain
//! RGB565 framebuffer that allows overdraw and silently clips.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_hal::delay::DelayNs;

pub struct TestDisplay {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
    pub draw_calls: usize,
}

impl TestDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            width,
            height,
            draw_calls: 0,
        }
    }

    /// 128x160 ST7735 glass
    pub fn default_size() -> Self {
        Self::new(128, 160)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    pub fn count_in(&self, area: &embedded_graphics::primitives::Rectangle, color: Rgb565) -> usize {
        use embedded_graphics::primitives::PointsIter;
        area.points().filter(|p| self.pixel(p.x, p.y) == color).count()
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_calls += 1;
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Adds up requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ms: u64,
    pub calls: usize,
    /// Every `delay_ms` argument, in order
    pub history: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ns) / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);
        self.history.push(ms);
    }
}

/// Panel whose bus is gone: every draw fails.
pub struct FailingDisplay;

#[derive(Debug, PartialEq, Eq)]
pub struct BusError;

impl DrawTarget for FailingDisplay {
    type Color = Rgb565;
    type Error = BusError;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Err(BusError)
    }
}

impl OriginDimensions for FailingDisplay {
    fn size(&self) -> Size {
        Size::new(128, 160)
    }
}

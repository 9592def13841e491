//! Demo selection menu.
//!
//! This module provides:
//! - The `Demo` enum and its round-robin navigation (`next`, `prev`)
//! - `DemoMenu`, the cursor over `Demo::ALL`, and `show` to render it
//!
//! The menu is a framed list, one 6x10 text row per demo, with the
//! selected row drawn black on a white bar.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

// Layout, (0,0) is top-left corner
const MARGIN: i32 = 4;
const ROW_PITCH: i32 = 12;
const TEXT_X: i32 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Demo {
    Bitmap,
    Sprites,
    Fonts,
    Canvas,
    Lines,
}

impl Demo {
    // Menu order
    pub const ALL: [Demo; 5] = [Demo::Bitmap, Demo::Sprites, Demo::Fonts, Demo::Canvas, Demo::Lines];

    pub fn next(self) -> Self {
        use Demo::*;
        match self {
            Bitmap => Sprites,
            Sprites => Fonts,
            Fonts => Canvas,
            Canvas => Lines,
            Lines => Bitmap,
        }
    }

    pub fn prev(self) -> Self {
        use Demo::*;
        match self {
            Bitmap => Lines,
            Sprites => Bitmap,
            Fonts => Sprites,
            Canvas => Fonts,
            Lines => Canvas,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Demo::Bitmap => "draw bitmap",
            Demo::Sprites => "sprites",
            Demo::Fonts => "fonts",
            Demo::Canvas => "nano canvas",
            Demo::Lines => "draw lines",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    // Out of range falls back to the first entry
    pub fn from_index(n: usize) -> Self {
        Self::ALL.get(n).copied().unwrap_or(Demo::Bitmap)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DemoMenu {
    selected: Demo,
}

impl Default for DemoMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoMenu {
    pub const fn new() -> Self {
        Self { selected: Demo::Bitmap }
    }

    pub fn selection(&self) -> Demo {
        self.selected
    }

    pub fn size(&self) -> usize {
        Demo::ALL.len()
    }

    pub fn down(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn up(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Screen rectangle of item `index`'s highlight bar.
    pub fn row_area(&self, bounds: Rectangle, index: usize) -> Rectangle {
        let width = bounds.size.width.saturating_sub(2 * (MARGIN as u32 + 1));
        Rectangle::new(
            bounds.top_left + Point::new(MARGIN + 1, 2 * MARGIN + index as i32 * ROW_PITCH),
            Size::new(width, ROW_PITCH as u32),
        )
    }

    /// Draw the frame and every row. Rows repaint their own background,
    /// so calling this again after `down`/`up` just moves the bar.
    pub fn show<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let bounds = display.bounding_box();
        let frame = Rectangle::new(
            bounds.top_left + Point::new(MARGIN, MARGIN),
            Size::new(
                bounds.size.width.saturating_sub(2 * MARGIN as u32),
                (self.size() as i32 * ROW_PITCH + 2 * MARGIN) as u32,
            ),
        );
        frame
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(display)?;

        for demo in Demo::ALL {
            let row = self.row_area(bounds, demo.index());
            let (fg, bg) = if demo == self.selected {
                (Rgb565::BLACK, Rgb565::WHITE)
            } else {
                (Rgb565::WHITE, Rgb565::BLACK)
            };

            display.fill_solid(&row, bg)?;
            Text::with_baseline(
                demo.label(),
                Point::new(bounds.top_left.x + TEXT_X, row.top_left.y + 1),
                MonoTextStyle::new(&FONT_6X10, fg),
                Baseline::Top,
            )
            .draw(display)?;
        }
        Ok(())
    }
}

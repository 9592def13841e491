//! Small off-screen monochrome canvas.
//!
//! Drawing happens in a 1 bpp `Framebuffer` in RAM; `blit` pushes the whole
//! thing to the panel in one window write, set bits in the foreground colour
//! and clear bits in the background colour.

use core::convert::Infallible;

use embedded_graphics::{
    framebuffer::{buffer_size, Framebuffer},
    image::{GetPixel, Image},
    mono_font::{ascii::FONT_6X13_BOLD, MonoTextStyleBuilder},
    pixelcolor::{
        raw::{BigEndian, RawU1},
        BinaryColor,
    },
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

pub const CANVAS_WIDTH: usize = 64;
pub const CANVAS_HEIGHT: usize = 16;

type Buffer = Framebuffer<
    BinaryColor,
    RawU1,
    BigEndian,
    CANVAS_WIDTH,
    CANVAS_HEIGHT,
    { buffer_size::<BinaryColor>(CANVAS_WIDTH, CANVAS_HEIGHT) },
>;

// Drawing into RAM can't fail.
fn infallible<T>(r: Result<T, Infallible>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => match e {},
    }
}

pub struct MonoCanvas {
    buf: Buffer,
}

impl Default for MonoCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MonoCanvas {
    pub fn new() -> Self {
        Self { buf: Buffer::new() }
    }

    pub fn clear(&mut self) {
        self.buf = Buffer::new();
    }

    /// Fill the rectangle with inclusive corners `(x1, y1)` and `(x2, y2)`.
    /// Anything past the canvas edge is dropped.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let rect = Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2))
            .intersection(&self.buf.bounding_box());
        infallible(
            rect.into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut self.buf),
        );
    }

    /// Bold 6x13 text with its cell background cleared, top-left anchored.
    pub fn print_bold(&mut self, x: i32, y: i32, text: &str) {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X13_BOLD)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();
        infallible(
            Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
                .draw(&mut self.buf)
                .map(|_| ()),
        );
    }

    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.buf.pixel(Point::new(x, y)) == Some(BinaryColor::On)
    }

    pub fn blit<D, C>(&self, target: &mut D, top_left: Point, foreground: C, background: C) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        C: PixelColor,
    {
        let mut tinted = Tinted {
            target,
            on: foreground,
            off: background,
        };
        Image::new(&self.buf.as_image(), top_left).draw(&mut tinted)
    }
}

/// Presents a colour target as a `BinaryColor` one.
struct Tinted<'a, D, C> {
    target: &'a mut D,
    on: C,
    off: C,
}

impl<D, C> Dimensions for Tinted<'_, D, C>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D, C> DrawTarget for Tinted<'_, D, C>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (on, off) = (self.on, self.off);
        self.target.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(p, c)| Pixel(p, if c.is_on() { on } else { off })),
        )
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let (on, off) = (self.on, self.off);
        self.target
            .fill_contiguous(area, colors.into_iter().map(|c| if c.is_on() { on } else { off }))
    }
}

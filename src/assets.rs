//! Canned images for the demos, plus the two small pixel formats they are stored in.
//!
//! - `PageBitmap`: 1 bpp, page oriented. One byte is a column of 8 pixels,
//!   LSB at the top; pages of `width` bytes stack downwards. This is the
//!   native layout of SSD1306-style frame buffers and of most LCD bitmap tools.
//! - `Rgb332`: 8 bpp packed colour (`RRRGGGBB`), row major. Drawn through
//!   `ImageRaw` and converted to the panel's RGB565 on the fly.

use embedded_graphics::{
    pixelcolor::{
        raw::{RawData, RawU8},
        Rgb565,
    },
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

pub const HEART_SIZE: Size = Size::new(8, 8);
pub const OWL_SIZE: Size = Size::new(128, 64);

/// 8x8 heart, page format (columns left to right, bit 0 = top row).
pub const HEART_1BPP: [u8; 8] = [
    0b0000_1110,
    0b0001_1111,
    0b0011_1111,
    0b0111_1110,
    0b0111_1110,
    0b0011_1101,
    0b0001_1001,
    0b0000_1110,
];

/// 8x8 shaded heart, RGB332, row major.
#[rustfmt::skip]
pub const HEART_RGB332: [u8; 64] = [
    0x00, 0xE0, 0xE0, 0x00, 0x00, 0xE5, 0xE5, 0x00,
    0xE0, 0xC0, 0xE0, 0xE0, 0xE0, 0xEC, 0xEC, 0xE5,
    0xC0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE5, 0xEC, 0xE5,
    0x80, 0xC0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE5, 0xE0,
    0x00, 0x80, 0xC0, 0xE0, 0xE0, 0xE0, 0xE0, 0x00,
    0x00, 0x00, 0x80, 0xE0, 0xE0, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0xE0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// 128x64 owl on a branch, page format (8 pages x 128 columns).
#[rustfmt::skip]
pub static OWL_1BPP: [u8; 1024] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x60, 0x70, 0x78, 0x78, 0x60, 0x00, 0x00, 0x00, 0x00,
    0x80, 0x80, 0x80, 0x80, 0xC0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0xC0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xC0, 0x80, 0x80, 0x80,
    0x80, 0x00, 0x00, 0x00, 0x00, 0x60, 0x78, 0x70, 0x60, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xC0, 0xF0, 0x3C, 0x0E, 0x07, 0x03,
    0x01, 0x81, 0xC0, 0x40, 0xE0, 0xC0, 0xC0, 0x81, 0x01, 0x03, 0x07, 0x0F, 0x3F, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x3F, 0x0F, 0x07, 0x03, 0x01, 0x81, 0xC0, 0x40, 0xE0, 0xC0, 0xC0, 0x81,
    0x01, 0x03, 0x07, 0x0E, 0x3C, 0xF0, 0xC0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xC0, 0xF0, 0xF8, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xF8, 0xE0, 0xC0, 0x80,
    0x02, 0x0F, 0x1F, 0x1F, 0x3F, 0x1F, 0x1F, 0x0F, 0x02, 0x80, 0xC0, 0xE0, 0xF8, 0x3F, 0x3F, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3F, 0xF8, 0xE0, 0xC0, 0x80, 0x02, 0x0F, 0x1F, 0x1F, 0x3F, 0x1F, 0x1F, 0x0F,
    0x02, 0x80, 0xC0, 0xE0, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xF8, 0xF0, 0xC0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x7F, 0x3E, 0x1E, 0x0E, 0x06, 0x06, 0x03, 0x03, 0x03, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x03, 0x03, 0x03, 0x06, 0x06, 0x0E, 0x1E, 0x3E, 0x7F,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x40, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x1F, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF, 0x03,
    0x04, 0x02, 0x01, 0x02, 0x84, 0x40, 0x84, 0x02, 0x01, 0x02, 0x84, 0x40, 0x84, 0x02, 0x01, 0x02,
    0x84, 0x40, 0x84, 0x02, 0x01, 0x02, 0x84, 0x40, 0x84, 0x02, 0x01, 0x02, 0x84, 0x40, 0x80, 0x00,
    0x00, 0x03, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x1F, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x03, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xF8,
    0xE0, 0xE0, 0x90, 0x21, 0x40, 0x00, 0x40, 0x21, 0x10, 0x21, 0x40, 0x00, 0x40, 0x21, 0x10, 0x21,
    0x40, 0x00, 0x40, 0x21, 0x10, 0x21, 0x40, 0x00, 0x40, 0x21, 0x10, 0x21, 0x40, 0x00, 0x80, 0xC1,
    0xE0, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x3F, 0x1F, 0x0F, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x31, 0x33, 0x33,
    0x37, 0x37, 0x3F, 0x3F, 0x3E, 0x3C, 0x3C, 0x38, 0x3E, 0x38, 0x30, 0x30, 0x30, 0x3E, 0x30, 0x30,
    0x70, 0x30, 0x30, 0x3E, 0x30, 0x30, 0x30, 0x38, 0x3E, 0x38, 0x3C, 0x3C, 0x3E, 0x3F, 0x3F, 0x37,
    0x37, 0x33, 0x33, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Monochrome page-format bitmap placed somewhere on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageBitmap<'a> {
    data: &'a [u8],
    area: Rectangle,
}

impl<'a> PageBitmap<'a> {
    /// `data` must hold `ceil(height / 8) * width` bytes; missing bytes read as unset.
    pub const fn new(data: &'a [u8], size: Size) -> Self {
        Self {
            data,
            area: Rectangle::new(Point::zero(), size),
        }
    }

    pub fn at(mut self, top_left: Point) -> Self {
        self.area.top_left = top_left;
        self
    }

    pub fn size(&self) -> Size {
        self.area.size
    }

    /// Bit at local coordinates `(x, y)`.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        let Size { width, height } = self.area.size;
        if x >= width || y >= height {
            return false;
        }
        let idx = (y / 8) as usize * width as usize + x as usize;
        self.data
            .get(idx)
            .map_or(false, |byte| byte & (1 << (y % 8)) != 0)
    }

    /// Pick colours. With a background the blit is opaque, without it unset bits are skipped.
    pub fn styled<C: PixelColor>(self, foreground: C, background: Option<C>) -> StyledPageBitmap<'a, C> {
        StyledPageBitmap {
            bitmap: self,
            foreground,
            background,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyledPageBitmap<'a, C> {
    bitmap: PageBitmap<'a>,
    foreground: C,
    background: Option<C>,
}

impl<C: PixelColor> StyledPageBitmap<'_, C> {
    fn color_at(&self, p: Point) -> Option<C> {
        let local = p - self.bitmap.area.top_left;
        if self.bitmap.is_set(local.x as u32, local.y as u32) {
            Some(self.foreground)
        } else {
            self.background
        }
    }
}

impl<C: PixelColor> Dimensions for StyledPageBitmap<'_, C> {
    fn bounding_box(&self) -> Rectangle {
        self.bitmap.area
    }
}

impl<C: PixelColor> Drawable for StyledPageBitmap<'_, C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = self.bitmap.area;
        let clip = target.bounding_box();

        match self.background {
            // Fully on screen and opaque: one window write
            Some(bg) if clip.intersection(&area) == area => {
                let colors = area.points().map(|p| self.color_at(p).unwrap_or(bg));
                target.fill_contiguous(&area, colors)
            }
            _ => target.draw_iter(
                area.points()
                    .filter(|p| clip.contains(*p))
                    .filter_map(|p| self.color_at(p).map(|c| Pixel(p, c))),
            ),
        }
    }
}

/// Packed 8 bit colour, `RRRGGGBB`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb332(u8);

impl Rgb332 {
    pub const fn new(packed: u8) -> Self {
        Self(packed)
    }

    pub const fn r(self) -> u8 {
        self.0 >> 5
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 2) & 0x07
    }

    pub const fn b(self) -> u8 {
        self.0 & 0x03
    }
}

impl PixelColor for Rgb332 {
    type Raw = RawU8;
}

impl From<RawU8> for Rgb332 {
    fn from(raw: RawU8) -> Self {
        Self(raw.into_inner())
    }
}

// Replicate the high bits into the low ones so full scale maps to full scale.
impl From<Rgb332> for Rgb565 {
    fn from(c: Rgb332) -> Self {
        let (r, g, b) = (c.r(), c.g(), c.b());
        Rgb565::new(
            (r << 2) | (r >> 1),
            (g << 3) | g,
            (b << 3) | (b << 1) | (b >> 1),
        )
    }
}

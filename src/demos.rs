//! The canned demo routines.
//!
//! Every routine owns the whole screen: it clears, draws, then holds the
//! result for a while so it can be looked at. All drawing goes through
//! embedded-graphics, so the same code runs against the ST7735 on the board
//! and against an in-memory framebuffer on the host.

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{
        ascii::{FONT_6X13, FONT_6X13_BOLD, FONT_6X13_ITALIC},
        MonoFont, MonoTextStyleBuilder,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;

use crate::assets::{PageBitmap, Rgb332, HEART_1BPP, HEART_RGB332, HEART_SIZE, OWL_1BPP, OWL_SIZE};
use crate::canvas::{MonoCanvas, CANVAS_WIDTH};
use crate::menu::{Demo, DemoMenu};

/// 8 bit per channel to RGB565, usable in consts.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const OWL_BLUE: Rgb565 = rgb(64, 64, 255);
pub const HEART_RED: Rgb565 = rgb(255, 64, 64);
pub const SPRITE_RED: Rgb565 = rgb(255, 32, 32);

// Timing (milliseconds)
pub const HOLD_MS: u32 = 3000;
pub const SPRITE_FRAMES: u32 = 250;
pub const SPRITE_FRAME_MS: u32 = 15;
pub const CANVAS_STEP_MS: [u32; 3] = [500, 1500, HOLD_MS];

// Pause on the menu before starting the selected demo
pub const MENU_IDLE_MS: u32 = 1000;
// How long the finished item stays highlighted before moving on
pub const MENU_STEP_MS: u32 = 500;

const TEXT_TOP: i32 = 8;
const LINE_STEP: usize = 8;

pub fn run<D, Dl>(demo: Demo, display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    match demo {
        Demo::Bitmap => bitmap_demo(display, delay),
        Demo::Sprites => sprite_demo(display, delay),
        Demo::Fonts => text_demo(display, delay),
        Demo::Canvas => canvas_demo(display, delay),
        Demo::Lines => lines_demo(display, delay),
    }
}

/// What one pass of the menu loop did. Draw errors are reported, not
/// propagated, so a broken demo never stalls the menu.
#[derive(Debug)]
pub struct CycleReport<E> {
    pub demo: Demo,
    pub demo_result: Result<(), E>,
    pub menu_result: Result<(), E>,
}

pub fn redraw_menu<D>(display: &mut D, menu: &DemoMenu) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(Rgb565::BLACK)?;
    menu.show(display)
}

/// One pass of the main loop: idle on the menu, run the highlighted demo,
/// put the menu back, then step the highlight down.
pub fn cycle<D, Dl>(menu: &mut DemoMenu, display: &mut D, delay: &mut Dl) -> CycleReport<D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    delay.delay_ms(MENU_IDLE_MS);

    let demo = menu.selection();
    let demo_result = run(demo, display, delay);

    let redrawn = redraw_menu(display, menu);
    delay.delay_ms(MENU_STEP_MS);

    menu.down();
    let menu_result = redrawn.and(menu.show(display));

    CycleReport {
        demo,
        demo_result,
        menu_result,
    }
}

pub fn bitmap_demo<D, Dl>(display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    display.clear(Rgb565::BLACK)?;
    let origin = display.bounding_box().top_left;

    PageBitmap::new(&OWL_1BPP, OWL_SIZE)
        .at(origin)
        .styled(OWL_BLUE, Some(Rgb565::BLACK))
        .draw(display)?;

    let heart = ImageRaw::<Rgb332>::new(&HEART_RGB332, HEART_SIZE.width);
    Image::new(&heart, origin).draw(&mut display.color_converted())?;

    PageBitmap::new(&HEART_1BPP, HEART_SIZE)
        .at(origin + Point::new(0, 16))
        .styled(HEART_RED, Some(Rgb565::BLACK))
        .draw(display)?;

    delay.delay_ms(HOLD_MS);
    Ok(())
}

/// Position of the bouncing heart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    pub pos: Point,
}

impl Sprite {
    pub fn cell(&self) -> Rectangle {
        Rectangle::new(self.pos, HEART_SIZE)
    }

    /// One step down-right; each axis wraps to 0 on reaching the screen edge.
    pub fn advance(&mut self, screen: Size) {
        self.pos.x += 1;
        if self.pos.x >= screen.width as i32 {
            self.pos.x = 0;
        }
        self.pos.y += 1;
        if self.pos.y >= screen.height as i32 {
            self.pos.y = 0;
        }
    }
}

/// Moves the heart without redrawing the whole screen: per frame only the
/// old cell is blanked and the new one painted.
pub fn sprite_demo<D, Dl>(display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    let screen = display.bounding_box();
    let heart = PageBitmap::new(&HEART_1BPP, HEART_SIZE);
    let mut sprite = Sprite::default();

    display.clear(Rgb565::BLACK)?;
    heart
        .at(screen.top_left + sprite.pos)
        .styled(SPRITE_RED, Some(Rgb565::BLACK))
        .draw(display)?;

    for _ in 0..SPRITE_FRAMES {
        delay.delay_ms(SPRITE_FRAME_MS);

        let old = sprite.cell();
        sprite.advance(screen.size);

        let dirty = Rectangle::new(screen.top_left + old.top_left, old.size).intersection(&screen);
        display.fill_solid(&dirty, Rgb565::BLACK)?;
        heart
            .at(screen.top_left + sprite.pos)
            .styled(SPRITE_RED, Some(Rgb565::BLACK))
            .draw(display)?;
    }
    Ok(())
}

pub fn text_demo<D, Dl>(display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    display.clear(Rgb565::BLACK)?;
    let origin = display.bounding_box().top_left;
    let pitch = FONT_6X13.character_size.height as i32 + 1;

    let rows: [(&str, &MonoFont<'static>, Rgb565, Option<Rgb565>); 4] = [
        ("Normal text", &FONT_6X13, Rgb565::YELLOW, None),
        ("bold text?", &FONT_6X13_BOLD, Rgb565::GREEN, None),
        ("Italic text?", &FONT_6X13_ITALIC, Rgb565::CYAN, None),
        // colours swapped
        ("Inverted bold?", &FONT_6X13_BOLD, Rgb565::BLACK, Some(Rgb565::WHITE)),
    ];

    for (i, (text, font, fg, bg)) in rows.into_iter().enumerate() {
        let mut style = MonoTextStyleBuilder::new().font(font).text_color(fg);
        if let Some(bg) = bg {
            style = style.background_color(bg);
        }
        Text::with_baseline(
            text,
            origin + Point::new(0, TEXT_TOP + i as i32 * pitch),
            style.build(),
            Baseline::Top,
        )
        .draw(display)?;
    }

    delay.delay_ms(HOLD_MS);
    Ok(())
}

/// Where the canvas lands: centred horizontally, one pixel from the top.
pub fn canvas_origin(screen: Rectangle) -> Point {
    screen.top_left + Point::new((screen.size.width as i32 - CANVAS_WIDTH as i32) / 2, 1)
}

pub fn canvas_demo<D, Dl>(display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    display.clear(Rgb565::BLACK)?;
    let at = canvas_origin(display.bounding_box());
    let mut canvas = MonoCanvas::new();
    canvas.clear();

    canvas.fill_rect(10, 3, 80, 5);
    canvas.blit(display, at, Rgb565::GREEN, Rgb565::BLACK)?;
    delay.delay_ms(CANVAS_STEP_MS[0]);

    canvas.fill_rect(50, 1, 60, 15);
    canvas.blit(display, at, Rgb565::GREEN, Rgb565::BLACK)?;
    delay.delay_ms(CANVAS_STEP_MS[1]);

    canvas.print_bold(20, 1, " DEMO ");
    canvas.blit(display, at, Rgb565::GREEN, Rgb565::BLACK)?;
    delay.delay_ms(CANVAS_STEP_MS[2]);

    Ok(())
}

/// Two fans from the top-left corner: red to the right edge, green to the bottom edge.
pub fn lines_demo<D, Dl>(display: &mut D, delay: &mut Dl) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    display.clear(Rgb565::BLACK)?;
    let screen = display.bounding_box();
    let corner = screen.top_left;
    let w = screen.size.width as i32;
    let h = screen.size.height as i32;

    let red = PrimitiveStyle::with_stroke(Rgb565::RED, 1);
    for y in (0..h).step_by(LINE_STEP) {
        Line::new(corner, corner + Point::new(w - 1, y))
            .into_styled(red)
            .draw(display)?;
    }

    let green = PrimitiveStyle::with_stroke(Rgb565::GREEN, 1);
    let mut x = w - 1;
    while x > LINE_STEP as i32 - 1 {
        Line::new(corner, corner + Point::new(x, h - 1))
            .into_styled(green)
            .draw(display)?;
        x -= LINE_STEP as i32;
    }

    delay.delay_ms(HOLD_MS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::{FailingDisplay, RecordingDelay, TestDisplay};

    fn heart_bits_in_columns(cols: core::ops::Range<usize>) -> usize {
        HEART_1BPP[cols].iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn palette_matches_8bit_inputs() {
        assert_eq!(rgb(255, 255, 255), Rgb565::WHITE);
        assert_eq!(rgb(0, 0, 0), Rgb565::BLACK);
        assert_eq!(OWL_BLUE, Rgb565::new(8, 16, 31));
    }

    #[test]
    fn bitmap_demo_layers_owl_and_hearts() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        bitmap_demo(&mut display, &mut delay).unwrap();

        // branch under the owl
        assert_eq!(display.pixel(64, 60), OWL_BLUE);
        // colour heart on top of the owl's top-left corner
        assert_eq!(display.pixel(0, 0), Rgb565::BLACK);
        assert_eq!(display.pixel(1, 0), Rgb565::RED);
        // mono heart 16 px lower
        assert_eq!(display.pixel(0, 16), Rgb565::BLACK);
        assert_eq!(display.pixel(1, 16), HEART_RED);
        assert_eq!(display.pixel(0, 17), HEART_RED);
        // nothing below the owl
        assert_eq!(display.pixel(64, 100), Rgb565::BLACK);

        assert_eq!(delay.total_ms, u64::from(HOLD_MS));
    }

    #[test]
    fn sprite_wraps_each_axis_independently() {
        let screen = Size::new(128, 160);

        let mut s = Sprite { pos: Point::new(127, 10) };
        s.advance(screen);
        assert_eq!(s.pos, Point::new(0, 11));

        let mut s = Sprite { pos: Point::new(5, 159) };
        s.advance(screen);
        assert_eq!(s.pos, Point::new(6, 0));
    }

    #[test]
    fn sprite_demo_leaves_single_heart_at_final_position() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        sprite_demo(&mut display, &mut delay).unwrap();

        // 250 steps on 128x160: x wrapped once, y once
        assert_eq!(Point::new(250 % 128, 250 % 160), Point::new(122, 90));

        // heart clipped by the right edge: only columns 0..6 visible
        assert_eq!(display.count(SPRITE_RED), heart_bits_in_columns(0..6));
        assert_eq!(display.pixel(123, 90), SPRITE_RED);
        assert_eq!(display.pixel(122, 90), Rgb565::BLACK);

        assert_eq!(delay.calls, SPRITE_FRAMES as usize);
        assert_eq!(delay.total_ms, u64::from(SPRITE_FRAMES * SPRITE_FRAME_MS));
    }

    #[test]
    fn sprite_demo_touches_only_dirty_cells() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        sprite_demo(&mut display, &mut delay).unwrap();

        // clear + first heart, then erase + heart per frame
        assert_eq!(display.draw_calls, 2 + 2 * SPRITE_FRAMES as usize);
    }

    #[test]
    fn text_demo_draws_four_styled_rows() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        text_demo(&mut display, &mut delay).unwrap();

        let pitch = 14;
        let row = |i: i32| Rectangle::new(Point::new(0, TEXT_TOP + i * pitch), Size::new(128, 13));

        assert!(display.count_in(&row(0), Rgb565::YELLOW) > 0);
        assert!(display.count_in(&row(1), Rgb565::GREEN) > 0);
        assert!(display.count_in(&row(2), Rgb565::CYAN) > 0);
        // inverted: white cell background dominates the text
        let inverted = Rectangle::new(Point::new(0, TEXT_TOP + 3 * pitch), Size::new(14 * 6, 13));
        assert!(display.count_in(&inverted, Rgb565::WHITE) > display.count_in(&inverted, Rgb565::BLACK));

        assert_eq!(delay.total_ms, u64::from(HOLD_MS));
    }

    #[test]
    fn canvas_is_centred() {
        let screen = Rectangle::new(Point::zero(), Size::new(128, 160));
        assert_eq!(canvas_origin(screen), Point::new(32, 1));
        let narrow = Rectangle::new(Point::zero(), Size::new(80, 160));
        assert_eq!(canvas_origin(narrow), Point::new(8, 1));
    }

    #[test]
    fn canvas_demo_composes_three_steps() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        canvas_demo(&mut display, &mut delay).unwrap();

        let at = Point::new(32, 1);
        let px = |x: i32, y: i32| display.pixel(at.x + x, at.y + y);

        // first bar, left of the text
        assert_eq!(px(10, 3), Rgb565::GREEN);
        // first bar clipped at the canvas edge
        assert_eq!(px(63, 5), Rgb565::GREEN);
        assert_eq!(display.pixel(at.x + 64, at.y + 5), Rgb565::BLACK);
        // second block, below the text row
        assert_eq!(px(55, 14), Rgb565::GREEN);
        // leading blank of " DEMO " knocks a hole in the bar
        assert_eq!(px(21, 4), Rgb565::BLACK);

        assert_eq!(delay.calls, 3);
        assert_eq!(delay.total_ms, CANVAS_STEP_MS.iter().map(|&ms| u64::from(ms)).sum::<u64>());
    }

    #[test]
    fn lines_demo_draws_both_fans() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        lines_demo(&mut display, &mut delay).unwrap();

        assert_eq!(display.pixel(127, 0), Rgb565::RED);
        assert_eq!(display.pixel(127, 8), Rgb565::RED);
        assert_eq!(display.pixel(127, 152), Rgb565::RED);
        assert_eq!(display.pixel(127, 159), Rgb565::GREEN);
        assert_eq!(display.pixel(15, 159), Rgb565::GREEN);
        // the fan stops before x = 7
        assert_eq!(display.pixel(7, 159), Rgb565::BLACK);
        // green is drawn last
        assert_eq!(display.pixel(0, 0), Rgb565::GREEN);

        assert_eq!(delay.total_ms, u64::from(HOLD_MS));
    }

    #[test]
    fn run_dispatches_by_demo() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        run(Demo::Lines, &mut display, &mut delay).unwrap();
        assert_eq!(display.pixel(127, 0), Rgb565::RED);

        let mut delay = RecordingDelay::default();
        run(Demo::Canvas, &mut display, &mut delay).unwrap();
        assert_eq!(display.pixel(127, 0), Rgb565::BLACK);
        assert_eq!(delay.calls, 3);
    }

    #[test]
    fn cycle_idles_runs_then_steps_the_menu() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        let mut menu = DemoMenu::new();
        menu.down();
        menu.down();

        let report = cycle(&mut menu, &mut display, &mut delay);

        assert_eq!(report.demo, Demo::Fonts);
        assert!(report.demo_result.is_ok());
        assert!(report.menu_result.is_ok());
        assert_eq!(delay.history, [MENU_IDLE_MS, HOLD_MS, MENU_STEP_MS]);
        assert_eq!(menu.selection(), Demo::Canvas);

        // menu is what is left on screen, frame included
        assert_eq!(display.pixel(4, 4), Rgb565::WHITE);
        assert_eq!(display.count(Rgb565::YELLOW), 0);
    }

    #[test]
    fn cycle_moves_on_after_a_failed_demo() {
        let mut display = FailingDisplay;
        let mut delay = RecordingDelay::default();
        let mut menu = DemoMenu::new();

        let report = cycle(&mut menu, &mut display, &mut delay);

        assert_eq!(report.demo, Demo::Bitmap);
        assert!(report.demo_result.is_err());
        assert!(report.menu_result.is_err());
        // the demo bailed before its hold, menu pacing is unchanged
        assert_eq!(delay.history, [MENU_IDLE_MS, MENU_STEP_MS]);
        assert_eq!(menu.selection(), Demo::Sprites);

        let report = cycle(&mut menu, &mut display, &mut delay);
        assert_eq!(report.demo, Demo::Sprites);
        assert_eq!(menu.selection(), Demo::Fonts);
    }

    #[test]
    fn full_round_visits_every_demo_in_order() {
        let mut display = TestDisplay::default_size();
        let mut delay = RecordingDelay::default();
        let mut menu = DemoMenu::new();

        let visited: Vec<_> = (0..menu.size())
            .map(|_| cycle(&mut menu, &mut display, &mut delay).demo)
            .collect();

        assert_eq!(visited, Demo::ALL);
        assert_eq!(menu.selection(), Demo::Bitmap);
    }
}

//! ST7735 demo reel
//! ========================================
//! source ~/export-esp.sh
//! cargo +esp run --release --features esp32 --target xtensa-esp32-none-elf
//! ========================================
//!
//! Shows a menu of graphics demos, runs the highlighted one, then moves
//! the highlight down and repeats forever.

//% CHIPS: esp32 esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

// Module imports
use esp32_tft_demo::{
    config::{PANEL, SPI_STAGING_BUF},
    demos::{self, CycleReport},
    display::setup_display,
    menu::DemoMenu,
    wiring::init_board_pins,
};

use esp_backtrace as _;

// ESP-HAL imports
use esp_hal::{delay::Delay, main, time::Instant, Config};

use esp_println::println;

#[main]
fn main() -> ! {
    // Initialize peripherals
    let peripherals = esp_hal::init(Config::default());
    let mut delay = Delay::new();

    println!(
        "ST7735 {}x{} @ {} MHz",
        PANEL.width,
        PANEL.height,
        PANEL.spi_hz / 1_000_000
    );

    let pins = init_board_pins(peripherals);

    let mut spi_buf = [0u8; SPI_STAGING_BUF];
    let mut display = match setup_display(pins, &mut spi_buf, &mut delay) {
        Ok(d) => d,
        Err(e) => panic!("display setup failed: {}", e),
    };

    let mut menu = DemoMenu::new();
    if let Err(e) = demos::redraw_menu(&mut display, &menu) {
        println!("menu draw failed: {:?}", e);
    }

    // Main loop: one menu pass per iteration
    loop {
        let demo = menu.selection();
        println!("[{}] {}", demo.index(), demo.label());

        let started = Instant::now();
        let CycleReport {
            demo,
            demo_result,
            menu_result,
        } = demos::cycle(&mut menu, &mut display, &mut delay);

        match demo_result {
            Ok(()) => println!("[{}] done, pass took {} ms", demo.index(), started.elapsed().as_millis()),
            Err(e) => println!("[{}] failed: {:?}", demo.index(), e),
        }
        if let Err(e) = menu_result {
            println!("menu draw failed: {:?}", e);
        }
    }
}

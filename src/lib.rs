#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod canvas;
pub mod config;
pub mod demos;
pub mod error;
pub mod menu;

#[cfg(any(feature = "esp32", feature = "esp32s3"))]
pub mod display;
#[cfg(any(feature = "esp32", feature = "esp32s3"))]
pub mod wiring;

#[cfg(test)]
mod test_display;

#[cfg(all(feature = "esp32", feature = "esp32s3"))]
compile_error!("enable exactly one chip feature: esp32 or esp32s3");

#[cfg(all(feature = "hw", not(any(feature = "esp32", feature = "esp32s3"))))]
compile_error!("the hw feature needs a chip: build with --features esp32 or --features esp32s3");

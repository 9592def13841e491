// Link scripts only make sense for the bare-metal firmware; host test builds skip them.
fn main() {
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    if os == "none" {
        println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
        if arch == "xtensa" {
            println!("cargo:rustc-link-arg-bins=-nostartfiles");
        }
    }
}

//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Starting Swatchpad");

    // Optional saved palette, e.g. `swatchpad '#ff0000-00ff00'`
    let fragment = std::env::args().nth(1);
    swatchpad_app::terminal::run(fragment)
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}

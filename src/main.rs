//! Calm Flight entry point
//!
//! Opens the native window and runs the frame loop until it stops.

use calm_flight::platform::NativeWindow;
use calm_flight::{Error, FrameDriver, Settings};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Calm Flight starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);

    let mut window = NativeWindow::new(&settings)?;
    let mut driver = FrameDriver::from_settings(&settings, seed);
    driver.run(&mut window)?;

    log::info!("Goodbye");
    Ok(())
}

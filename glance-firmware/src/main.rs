//! Glance - Sensor Display Firmware
//!
//! Main firmware binary for an RP2040 driving a 16x2 character LCD.
//! The keypad cycles through the sensors; the selected one is redrawn
//! twice a second.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use glance_core::app::App;
use glance_core::config::AppConfig;
use glance_core::sensors::reference_sensors;
use glance_hal::Clock;
use glance_hal_rp2040::EmbassyClock;

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Glance firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = match board::init(p) {
        Ok(board) => board,
        Err(e) => halt("board wiring", e),
    };

    let config = AppConfig::default();
    let registry = match reference_sensors() {
        Ok(registry) => registry,
        Err(e) => halt("sensor registration", e),
    };
    info!(
        "{} sensors, keypad every {} ms, display every {} ms",
        registry.count(),
        config.keypad_interval_ms,
        config.display_interval_ms
    );

    let mut app = match App::new(&config, registry, board.io, board.lcd, Delay) {
        Ok(app) => app,
        Err(e) => halt("application startup", e),
    };
    info!("Display initialized, entering main loop");

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(board::LOOP_TICK_MS));

    loop {
        ticker.next().await;
        app.tick(clock.now_ms());
    }
}

/// Log a fatal startup error and stop
fn halt(stage: &str, e: impl Format) -> ! {
    error!("{} failed: {}", stage, e);
    loop {
        cortex_m::asm::wfi();
    }
}

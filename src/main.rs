//! Composition root: owns the hardware, the interrupt flag, and the tick loop.
//!
//! The loop itself carries no logic; it wires the tick phases from the
//! library together and owns the two concerns that must not live in testable
//! code: process termination and hardware teardown. Cleanup (blank panel,
//! controller off, GPIO unexport) runs on every exit path: interrupt,
//! confirmed power action, and hardware failure alike.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};
use signal_hook::consts::{SIGINT, SIGTERM};

use infoscreen::button::Button;
use infoscreen::config::{BANNER_HOLD, I2C_BUS, PIN_BUTTON, TICK};
use infoscreen::input::process_button;
use infoscreen::oled::Oled;
use infoscreen::power;
use infoscreen::refresh::refresh_data;
use infoscreen::render::render_frame;
use infoscreen::state::AppState;
use infoscreen::stats::HostStats;
use infoscreen::widgets;

fn main() -> Result<()> {
    env_logger::init();

    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&interrupted)).context("registering SIGINT")?;
    signal_hook::flag::register(SIGTERM, Arc::clone(&interrupted)).context("registering SIGTERM")?;

    let mut oled = Oled::open()?;
    let button = Button::open(PIN_BUTTON)?;
    info!("hardware up: SSD1306 on {I2C_BUS}, button on GPIO {PIN_BUTTON}");

    let result = run(&mut oled, &button, &interrupted);
    if let Err(e) = &result {
        error!("control loop failed: {e:#}");
    }

    oled.power_off();
    button.release();
    result
}

/// The control loop. Returns on interrupt, after a confirmed power action,
/// or with an error on hardware failure.
fn run(
    oled: &mut Oled,
    button: &Button,
    interrupted: &Arc<AtomicBool>,
) -> Result<()> {
    widgets::banner(oled.frame(), "Infoscreen Started...");
    oled.flush()?;
    thread::sleep(BANNER_HOLD);

    let mut state = AppState::new();
    let mut stats = HostStats::new();

    while !interrupted.load(Ordering::Relaxed) {
        let tick_start = Instant::now();

        let pressed = button.is_pressed()?;
        if let Some(request) = process_button(&mut state, pressed) {
            // Instant feedback on the panel before the host goes down
            widgets::banner(oled.frame(), request.confirm_banner());
            oled.flush()?;
            info!("hold confirmed: {request:?}");
            power::invoke(request);
            return Ok(());
        }

        refresh_data(&mut state, &mut stats);
        render_frame(oled.frame(), &mut state);
        oled.flush()?;

        // Sleep out the remainder of the tick
        let elapsed = tick_start.elapsed();
        if elapsed < TICK {
            thread::sleep(TICK - elapsed);
        }
    }

    info!("interrupt received, closing");
    widgets::banner(oled.frame(), "Closing...");
    oled.flush()?;
    thread::sleep(BANNER_HOLD);
    Ok(())
}

//! Per-tick frame composition.
//!
//! Exactly one frame is produced every tick, even when the screensaver
//! leaves it blank; the caller always pushes the result to the display, so
//! the screensaver is a real blank frame and not a stale last image.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor};

use crate::screens;
use crate::state::{AppState, Mode, Screen};
use crate::widgets;

/// Compose the frame for the current tick, then burn one tick off the
/// inactivity timer (clamped at 0).
///
/// A zero `display_timer` leaves the frame blank: the screensaver. Otherwise
/// the frame shows the active info screen or, while a press is being
/// classified past a threshold, the matching hold menu.
pub fn render_frame<D>(
    display: &mut D,
    state: &mut AppState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();

    if state.display_timer > 0 {
        match state.mode {
            Mode::Info => match state.screen {
                Screen::Network => screens::network::draw(display, &state.cached_network),
                Screen::Performance => screens::performance::draw(display, &state.cached_performance),
            },
            Mode::RebootPending => widgets::hold_menu(display, "REBOOT", "To Reboot"),
            Mode::ShutdownPending => widgets::hold_menu(display, "SHUTDOWN", "To Shutdown"),
        }
    }

    state.display_timer = state.display_timer.saturating_sub(1);
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Input classification: turns raw button samples into mode transitions and
//! confirmed power requests.
//!
//! Classification is hold-duration based rather than edge based: a single
//! gesture (press, hold N ticks, release) fully determines what happens. The
//! two-threshold ladder changes the on-screen mode while the button is still
//! held, so the user sees what a release would do before committing:
//! releasing early aborts, holding longer escalates from reboot to shutdown.

use crate::config::{REBOOT_HOLD_TICKS, SCREEN_TIMEOUT_TICKS, SHUTDOWN_HOLD_TICKS};
use crate::power::PowerRequest;
use crate::state::{AppState, Mode, Screen};

/// Process one button sample for the current tick.
///
/// Mutates `state` and returns the power request confirmed by this tick's
/// release, if any. The caller executes the request and terminates the
/// process; this function never performs side effects itself.
pub fn process_button(
    state: &mut AppState,
    pressed: bool,
) -> Option<PowerRequest> {
    if pressed {
        // Wake the display and keep it awake for the whole hold
        state.display_timer = SCREEN_TIMEOUT_TICKS;

        // Capped at the shutdown threshold: anything above it classifies the
        // same, and the cap keeps an indefinite hold from overflowing
        state.hold_ticks = (state.hold_ticks + 1).min(SHUTDOWN_HOLD_TICKS);

        // Shutdown is checked first so it wins once both thresholds are crossed
        if state.hold_ticks >= SHUTDOWN_HOLD_TICKS {
            state.mode = Mode::ShutdownPending;
        } else if state.hold_ticks >= REBOOT_HOLD_TICKS {
            state.mode = Mode::RebootPending;
        }

        return None;
    }

    // Not pressed: a release only exists if a hold was in progress
    if state.hold_ticks == 0 {
        return None;
    }

    let request = match state.mode {
        Mode::RebootPending => Some(PowerRequest::Reboot),
        Mode::ShutdownPending => Some(PowerRequest::Shutdown),
        Mode::Info => None, // short tap: wake only
    };

    state.mode = Mode::Info;
    state.screen = Screen::Network;
    state.cycle_ticks = 0;
    state.hold_ticks = 0;

    request
}

// =============================================================================
// Unit Tests
// =============================================================================

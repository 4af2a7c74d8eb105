//! Application configuration constants.
//!
//! All timing is expressed in ticks of the fixed-rate control loop. The
//! second-based values from the hardware install notes are converted to tick
//! counts at compile time so the loop only ever compares integers.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 over I2C: 128x32).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 32;

/// Screen center X coordinate. Used for centering overlay text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// I2C bus device the display is attached to.
pub const I2C_BUS: &str = "/dev/i2c-1";

/// Top edge of each of the three text rows that fit on the 32px panel.
pub const ROW_Y: [i32; 3] = [0, 11, 21];

/// Y coordinate of the separator rule under the network screen text.
pub const RULE_Y: i32 = 25;

// =============================================================================
// Input Configuration
// =============================================================================

/// BCM number of the push-button GPIO (active-low, external pull-up).
pub const PIN_BUTTON: u64 = 20;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Control loop period in milliseconds.
pub const TICK_MS: u64 = 100;

/// Control loop period. The loop sleeps out the remainder of this after each
/// tick's work completes.
pub const TICK: Duration = Duration::from_millis(TICK_MS);

/// Ticks of inactivity before the display blanks (15 s).
pub const SCREEN_TIMEOUT_TICKS: u32 = (15_000 / TICK_MS) as u32;

/// Ticks the button must be held before a release triggers a reboot (3 s).
pub const REBOOT_HOLD_TICKS: u32 = (3_000 / TICK_MS) as u32;

/// Ticks the button must be held before a release triggers a shutdown (6 s).
/// Must be >= [`REBOOT_HOLD_TICKS`]; the shutdown check wins at high counts.
pub const SHUTDOWN_HOLD_TICKS: u32 = (6_000 / TICK_MS) as u32;

/// Ticks between data refreshes for the active info screen (0.5 s).
pub const STATS_REFRESH_TICKS: u32 = (500 / TICK_MS) as u32;

/// Ticks between automatic info screen switches (2 s).
pub const INFO_CYCLE_TICKS: u32 = (2_000 / TICK_MS) as u32;

/// How long the startup and farewell banners stay on screen.
pub const BANNER_HOLD: Duration = Duration::from_secs(2);

// =============================================================================
// Unit Tests
// =============================================================================

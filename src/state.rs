//! Shared application state mutated in place by the control loop.
//!
//! One [`AppState`] instance exists for the process lifetime. Each tick the
//! input classifier, the data refresher, and the renderer read and mutate it
//! in that order; nothing else touches it. Single thread, no locks.
//!
//! # Timers
//!
//! All timers are plain tick counters compared against the constants in
//! [`crate::config`]:
//!
//! | Field | Counts toward | Reset by |
//! |-------|---------------|----------|
//! | `display_timer` | display blanking (counts down) | any button press |
//! | `hold_ticks` | reboot/shutdown hold thresholds | button release |
//! | `cycle_ticks` | next automatic screen switch | switch, release |
//! | `stats_ticks` | next data refresh | refresh (forced on switch) |

use crate::config::{SCREEN_TIMEOUT_TICKS, STATS_REFRESH_TICKS};

/// Top-level display mode.
///
/// While the button is held, crossing the hold thresholds moves the mode one
/// way through Info -> RebootPending -> ShutdownPending; only a release goes
/// back to Info.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Normal operation: one of the cycling info screens is shown.
    Info,
    /// Button held past the reboot threshold; release reboots the host.
    RebootPending,
    /// Button held past the shutdown threshold; release shuts the host down.
    ShutdownPending,
}

/// Which info screen is shown while in [`Mode::Info`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Hostname and primary IP address.
    Network,
    /// CPU / memory / disk utilisation percentages.
    Performance,
}

impl Screen {
    /// The other screen, for the automatic cycle.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Network => Self::Performance,
            Self::Performance => Self::Network,
        }
    }
}

/// Last-known network identity of the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInfo {
    pub hostname: String,
    pub ip: String,
}

impl NetworkInfo {
    /// Cache contents before the first refresh has run.
    pub fn loading() -> Self {
        Self {
            hostname: "Loading...".into(),
            ip: "...".into(),
        }
    }

    /// Substitute shown when a lookup fails outright.
    pub fn unavailable() -> Self {
        Self {
            hostname: "unknown".into(),
            ip: "No IP".into(),
        }
    }
}

/// Last-known utilisation percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Performance {
    pub cpu_pct: f32,
    pub mem_pct: f32,
    pub disk_pct: f32,
}

/// All mutable state of the application.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Current display mode.
    pub mode: Mode,
    /// Active info screen; only meaningful while `mode` is [`Mode::Info`].
    pub screen: Screen,
    /// Ticks until the display blanks. 0 means screensaver.
    pub display_timer: u32,
    /// Consecutive ticks the button has been held; 0 when idle.
    pub hold_ticks: u32,
    /// Ticks accumulated toward the next automatic screen switch.
    pub cycle_ticks: u32,
    /// Ticks accumulated toward the next data refresh.
    pub stats_ticks: u32,
    /// Cached network identity, written only by the data refresher.
    pub cached_network: NetworkInfo,
    /// Cached utilisation figures, written only by the data refresher.
    pub cached_performance: Performance,
}

impl AppState {
    /// Initial state at process start: Info mode, network screen, full
    /// display timer. `stats_ticks` starts at the trigger value so the very
    /// first tick refreshes instead of showing the placeholder for half a
    /// second.
    pub fn new() -> Self {
        Self {
            mode: Mode::Info,
            screen: Screen::Network,
            display_timer: SCREEN_TIMEOUT_TICKS,
            hold_ticks: 0,
            cycle_ticks: 0,
            stats_ticks: STATS_REFRESH_TICKS,
            cached_network: NetworkInfo::loading(),
            cached_performance: Performance::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();

        assert_eq!(state.mode, Mode::Info, "should start in Info mode");
        assert_eq!(state.screen, Screen::Network, "should start on the network screen");
        assert_eq!(
            state.display_timer, SCREEN_TIMEOUT_TICKS,
            "display timer should start full"
        );
        assert_eq!(state.hold_ticks, 0, "button should start idle");
        assert_eq!(state.cycle_ticks, 0, "cycle counter should start at zero");
        assert_eq!(
            state.stats_ticks, STATS_REFRESH_TICKS,
            "stats counter should start at the trigger value for an immediate refresh"
        );
    }

    #[test]
    fn test_initial_caches_are_placeholders() {
        let state = AppState::new();

        assert_eq!(state.cached_network, NetworkInfo::loading());
        assert_eq!(state.cached_performance, Performance::default());
    }

    #[test]
    fn test_screen_toggle() {
        assert_eq!(Screen::Network.toggle(), Screen::Performance);
        assert_eq!(Screen::Performance.toggle(), Screen::Network);
    }

    #[test]
    fn test_default_matches_new() {
        let default_state = AppState::default();
        let new_state = AppState::new();

        assert_eq!(default_state.mode, new_state.mode);
        assert_eq!(default_state.display_timer, new_state.display_timer);
        assert_eq!(default_state.stats_ticks, new_state.stats_ticks);
    }
}

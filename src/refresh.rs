//! Slow-cadence data maintenance: screen cycling and stat cache refresh.
//!
//! Runs after the input classifier each tick, but only while the display is
//! awake and in Info mode; a blanked screen or an open hold menu freezes
//! both the cycle and the refresh counters.
//!
//! The cycle and refresh cadences are independent counters and may drift
//! relative to each other; they resynchronise at every screen switch, which
//! forces an immediate refresh so the incoming screen never shows stale data.

use log::warn;

use crate::config::{INFO_CYCLE_TICKS, STATS_REFRESH_TICKS};
use crate::state::{AppState, Mode, NetworkInfo, Screen};
use crate::stats::StatSource;

/// Advance the cycle/refresh counters for one tick and re-fetch cached data
/// for the active screen when due.
///
/// Only the active screen's data is fetched, never both. A failed network
/// lookup is logged and replaced with a placeholder so the loop keeps going.
pub fn refresh_data<S: StatSource>(
    state: &mut AppState,
    stats: &mut S,
) {
    if state.display_timer == 0 || state.mode != Mode::Info {
        return;
    }

    // Screen cycling. Forcing the stats counter to its trigger value makes
    // the refresh below fire on this same tick, for the new screen.
    if state.cycle_ticks >= INFO_CYCLE_TICKS {
        state.screen = state.screen.toggle();
        state.stats_ticks = STATS_REFRESH_TICKS;
        state.cycle_ticks = 0;
    } else {
        state.cycle_ticks += 1;
    }

    // Data refresh for the active screen.
    if state.stats_ticks >= STATS_REFRESH_TICKS {
        match state.screen {
            Screen::Network => {
                state.cached_network = stats.network().unwrap_or_else(|e| {
                    warn!("network lookup failed: {e:#}");
                    NetworkInfo::unavailable()
                });
            }
            Screen::Performance => {
                state.cached_performance = stats.performance();
            }
        }
        state.stats_ticks = 0;
    } else {
        state.stats_ticks += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::anyhow;

    use super::*;
    use crate::state::Performance;

    /// Scripted stat source: pops one queued network result per call.
    struct FakeStats {
        network_results: VecDeque<anyhow::Result<NetworkInfo>>,
        network_calls: u32,
        performance_calls: u32,
        performance: Performance,
    }

    impl FakeStats {
        fn new() -> Self {
            Self {
                network_results: VecDeque::new(),
                network_calls: 0,
                performance_calls: 0,
                performance: Performance {
                    cpu_pct: 12.5,
                    mem_pct: 40.0,
                    disk_pct: 77.3,
                },
            }
        }

        fn queue_ok(
            &mut self,
            hostname: &str,
            ip: &str,
        ) {
            self.network_results.push_back(Ok(NetworkInfo {
                hostname: hostname.into(),
                ip: ip.into(),
            }));
        }

        fn queue_err(&mut self) {
            self.network_results.push_back(Err(anyhow!("lookup failed")));
        }
    }

    impl StatSource for FakeStats {
        fn network(&mut self) -> anyhow::Result<NetworkInfo> {
            self.network_calls += 1;
            self.network_results.pop_front().unwrap_or_else(|| {
                Ok(NetworkInfo {
                    hostname: "testhost".into(),
                    ip: "192.0.2.1".into(),
                })
            })
        }

        fn performance(&mut self) -> Performance {
            self.performance_calls += 1;
            self.performance
        }
    }

    #[test]
    fn test_frozen_while_asleep() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        state.display_timer = 0;

        refresh_data(&mut state, &mut stats);

        assert_eq!(stats.network_calls, 0, "no fetches while the display is blank");
        assert_eq!(state.cycle_ticks, 0, "counters must not advance while asleep");
    }

    #[test]
    fn test_frozen_in_hold_menu() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        state.mode = Mode::RebootPending;

        refresh_data(&mut state, &mut stats);

        assert_eq!(stats.network_calls, 0, "no fetches while a hold menu is up");
        assert_eq!(state.stats_ticks, crate::config::STATS_REFRESH_TICKS);
    }

    #[test]
    fn test_first_tick_refreshes_immediately() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        stats.queue_ok("pi", "10.0.0.2");

        refresh_data(&mut state, &mut stats);

        assert_eq!(stats.network_calls, 1, "stats counter starts at its trigger value");
        assert_eq!(state.cached_network.hostname, "pi");
        assert_eq!(state.stats_ticks, 0, "counter resets after a refresh");
    }

    #[test]
    fn test_refresh_cadence() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();

        // First tick fetches; the counter then needs STATS_REFRESH_TICKS ticks
        // to climb back up plus one tick to trigger
        for _ in 0..=STATS_REFRESH_TICKS + 1 {
            refresh_data(&mut state, &mut stats);
        }
        assert_eq!(
            stats.network_calls, 2,
            "second fetch lands once the counter reaches the trigger again"
        );
    }

    #[test]
    fn test_only_active_screen_is_fetched() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();

        refresh_data(&mut state, &mut stats);

        assert_eq!(stats.network_calls, 1);
        assert_eq!(
            stats.performance_calls, 0,
            "performance must not be fetched while the network screen is active"
        );
    }

    #[test]
    fn test_cycle_toggles_screen_and_forces_refresh() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();

        // Arrange: counter at the cycle period, no refresh otherwise due
        state.cycle_ticks = INFO_CYCLE_TICKS;
        state.stats_ticks = 0;

        refresh_data(&mut state, &mut stats);

        assert_eq!(state.screen, Screen::Performance, "cycle should toggle the screen");
        assert_eq!(state.cycle_ticks, 0, "cycle counter resets on switch");
        assert_eq!(
            stats.performance_calls, 1,
            "switch forces a refresh for the incoming screen on the same tick"
        );
        assert_eq!(state.stats_ticks, 0);
    }

    #[test]
    fn test_cycle_period() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();

        // Exactly one toggle while the counter climbs from 0 through the period
        for _ in 0..INFO_CYCLE_TICKS {
            refresh_data(&mut state, &mut stats);
            assert_eq!(state.screen, Screen::Network, "no toggle before the period elapses");
        }
        refresh_data(&mut state, &mut stats);
        assert_eq!(state.screen, Screen::Performance, "toggle once the period elapses");
    }

    #[test]
    fn test_network_failure_caches_placeholder() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        stats.queue_err();

        refresh_data(&mut state, &mut stats);

        assert_eq!(
            state.cached_network,
            NetworkInfo::unavailable(),
            "failed lookup should cache the placeholder pair"
        );
    }

    #[test]
    fn test_network_recovery_replaces_placeholder() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        stats.queue_err();
        stats.queue_ok("pi", "10.0.0.2");

        // Failing fetch, then quiet ticks, then the recovering fetch
        for _ in 0..=STATS_REFRESH_TICKS + 1 {
            refresh_data(&mut state, &mut stats);
        }

        assert_eq!(state.cached_network.hostname, "pi");
        assert_eq!(state.cached_network.ip, "10.0.0.2");
    }

    #[test]
    fn test_cache_untouched_between_refreshes() {
        let mut state = AppState::new();
        let mut stats = FakeStats::new();
        stats.queue_ok("pi", "10.0.0.2");

        refresh_data(&mut state, &mut stats);
        let cached = state.cached_network.clone();

        // Quiet ticks: no fetch due, cache must not change
        refresh_data(&mut state, &mut stats);
        refresh_data(&mut state, &mut stats);

        assert_eq!(state.cached_network, cached, "cache only changes at refresh boundaries");
        assert_eq!(stats.network_calls, 1);
    }
}

//! Host statistics providers: network identity and utilisation percentages.
//!
//! The control loop consumes these through the [`StatSource`] trait so the
//! refresh logic can be tested with fakes. [`HostStats`] is the real
//! implementation, reading `/proc` and `statvfs` the way the kernel exposes
//! them. All calls are blocking and expected to be fast relative to the tick
//! period; none of them retries.

use std::fs;
use std::process::Command;

use anyhow::{Context, Result};
use nix::sys::statvfs::statvfs;

use crate::state::{NetworkInfo, Performance};

/// Where the refresh logic gets its data from.
pub trait StatSource {
    /// Hostname and primary IP address. May fail (DNS-less boards, early
    /// boot); the caller substitutes a placeholder.
    fn network(&mut self) -> Result<NetworkInfo>;

    /// CPU / memory / disk utilisation. Does not fail; unreadable sources
    /// degrade to 0.0 for the affected figure.
    fn performance(&mut self) -> Performance;
}

/// Live statistics for the host this process runs on.
pub struct HostStats {
    cpu: CpuTracker,
}

impl HostStats {
    pub fn new() -> Self {
        Self {
            cpu: CpuTracker::default(),
        }
    }
}

impl Default for HostStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatSource for HostStats {
    fn network(&mut self) -> Result<NetworkInfo> {
        let hostname = hostname::get()
            .context("looking up hostname")?
            .to_string_lossy()
            .into_owned();

        // A host with no address yet is normal right after boot; report it
        // as "No IP" rather than failing the whole lookup
        let ip = primary_ip().unwrap_or_else(|| "No IP".into());

        Ok(NetworkInfo { hostname, ip })
    }

    fn performance(&mut self) -> Performance {
        Performance {
            cpu_pct: self.cpu.sample().unwrap_or(0.0),
            mem_pct: memory_percent().unwrap_or(0.0),
            disk_pct: disk_percent("/").unwrap_or(0.0),
        }
    }
}

/// First address reported by `hostname -I`, if any.
fn primary_ip() -> Option<String> {
    let output = Command::new("hostname").arg("-I").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let raw = String::from_utf8_lossy(&output.stdout);
    raw.split_whitespace().next().map(str::to_owned)
}

// =============================================================================
// CPU Utilisation
// =============================================================================

/// CPU utilisation from `/proc/stat` aggregate-line deltas.
///
/// Utilisation is busy-time over total-time between two consecutive samples.
/// The first sample has no predecessor and therefore reports utilisation
/// since boot.
#[derive(Default)]
pub struct CpuTracker {
    prev_busy: u64,
    prev_idle: u64,
}

impl CpuTracker {
    fn sample(&mut self) -> Option<f32> {
        let raw = fs::read_to_string("/proc/stat").ok()?;
        let (busy, idle) = parse_cpu_times(&raw)?;
        Some(self.advance(busy, idle))
    }

    /// Fold in a new (busy, idle) jiffy pair and return the utilisation over
    /// the elapsed interval.
    fn advance(
        &mut self,
        busy: u64,
        idle: u64,
    ) -> f32 {
        let busy_delta = busy.saturating_sub(self.prev_busy);
        let idle_delta = idle.saturating_sub(self.prev_idle);
        self.prev_busy = busy;
        self.prev_idle = idle;

        let total = busy_delta + idle_delta;
        if total == 0 {
            return 0.0;
        }
        busy_delta as f32 / total as f32 * 100.0
    }
}

/// Cumulative (busy, idle) jiffies from the aggregate `cpu` line.
///
/// Fields: user nice system idle iowait irq softirq steal [guest ...].
/// `idle` counts idle + iowait; everything else counts as busy.
fn parse_cpu_times(raw: &str) -> Option<(u64, u64)> {
    let line = raw.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    if fields.len() < 5 {
        return None;
    }

    let idle = fields[3] + fields[4];
    let busy = fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 3 && *i != 4)
        .map(|(_, v)| *v)
        .sum();
    Some((busy, idle))
}

// =============================================================================
// Memory Utilisation
// =============================================================================

fn memory_percent() -> Option<f32> {
    let raw = fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo(&raw)
}

/// Used-memory percentage from `MemTotal` and `MemAvailable` (in-use =
/// total - available, the same figure `free` reports as used+cached pressure).
fn parse_meminfo(raw: &str) -> Option<f32> {
    let mut total = None;
    let mut available = None;

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            total = first_number(rest);
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            available = first_number(rest);
        }
    }

    let total = total?;
    let available = available?;
    if total == 0 {
        return None;
    }
    Some(total.saturating_sub(available) as f32 / total as f32 * 100.0)
}

fn first_number(rest: &str) -> Option<u64> {
    rest.split_whitespace().next()?.parse().ok()
}

// =============================================================================
// Disk Utilisation
// =============================================================================

/// Used percentage of the filesystem holding `path`, computed as
/// used / (used + available) so it matches what `df` shows for an
/// unprivileged user (root-reserved blocks excluded from the denominator).
fn disk_percent(path: &str) -> Option<f32> {
    let stat = statvfs(path).ok()?;

    let frsize = stat.fragment_size() as u64;
    let total = stat.blocks() as u64 * frsize;
    let free = stat.blocks_free() as u64 * frsize;
    let available = stat.blocks_available() as u64 * frsize;

    let used = total.saturating_sub(free);
    let denom = used + available;
    if denom == 0 {
        return None;
    }
    Some(used as f32 / denom as f32 * 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================

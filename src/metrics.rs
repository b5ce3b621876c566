// Analysis metrics module
//
// Lightweight counters for how often maps are scanned and what the scans find

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Analysis counters
///
/// Uses atomic operations so a shared `Arc<Metrics>` can be updated from the
/// analyzer and read from anywhere without locks.
#[derive(Debug)]
pub struct Metrics {
    /// Analysis passes that actually scanned items
    pub analysis_passes: AtomicU64,

    /// Analysis requests served from the cache
    pub cache_hits: AtomicU64,

    /// Maps seen across all passes
    pub maps_seen: AtomicU64,

    /// Maps meeting the active criteria
    pub maps_passing: AtomicU64,

    /// Maps with at least one good mod
    pub maps_with_good_mods: AtomicU64,

    /// Maps with at least one bad mod
    pub maps_with_bad_mods: AtomicU64,

    /// Total time spent scanning, in microseconds
    pub total_analysis_time_us: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            analysis_passes: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            maps_seen: AtomicU64::new(0),
            maps_passing: AtomicU64::new(0),
            maps_with_good_mods: AtomicU64::new(0),
            maps_with_bad_mods: AtomicU64::new(0),
            total_analysis_time_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a completed scan
    pub fn record_pass(&self, duration: Duration) {
        self.analysis_passes.fetch_add(1, Ordering::Relaxed);
        self.total_analysis_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one evaluated map
    pub fn record_map(&self, meets_criteria: bool, has_good_mods: bool, has_bad_mods: bool) {
        self.maps_seen.fetch_add(1, Ordering::Relaxed);
        if meets_criteria {
            self.maps_passing.fetch_add(1, Ordering::Relaxed);
        }
        if has_good_mods {
            self.maps_with_good_mods.fetch_add(1, Ordering::Relaxed);
        }
        if has_bad_mods {
            self.maps_with_bad_mods.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average scan time in microseconds
    pub fn avg_analysis_time_us(&self) -> f64 {
        let total = self.total_analysis_time_us.load(Ordering::Relaxed);
        let count = self.analysis_passes.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("=== Analysis Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Passes: {} scanned, {} served from cache (avg scan {:.1}us)",
            self.analysis_passes.load(Ordering::Relaxed),
            self.cache_hits.load(Ordering::Relaxed),
            self.avg_analysis_time_us()
        );
        tracing::info!(
            "Maps: {} seen, {} passing, {} with good mods, {} with bad mods",
            self.maps_seen.load(Ordering::Relaxed),
            self.maps_passing.load(Ordering::Relaxed),
            self.maps_with_good_mods.load(Ordering::Relaxed),
            self.maps_with_bad_mods.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

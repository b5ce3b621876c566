use crate::metrics::Metrics;
use crate::models::{AnalyzedMap, FilterConfiguration, InventoryItem};
use crate::services::evaluator::evaluate;
use crate::services::extraction::extract_map;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time an analysis pass stays valid
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(500);

/// Supplies the items currently visible to the player.
///
/// Implemented by the host (live game memory) or by
/// [`SnapshotSource`](crate::services::snapshot::SnapshotSource) for offline runs.
/// `None` means the panel is closed.
#[cfg_attr(test, mockall::automock)]
pub trait ItemSource {
    fn inventory_items(&self) -> Option<Vec<InventoryItem>>;

    fn stash_items(&self) -> Option<Vec<InventoryItem>>;
}

struct CachedPass {
    taken_at: Instant,
    config: FilterConfiguration,
    maps: Vec<AnalyzedMap>,
}

/// Scans an [`ItemSource`] for maps and evaluates them, caching each pass.
///
/// A pass is reused until the refresh interval elapses, the configuration
/// changes, or [`force_update`](Self::force_update) is called.
pub struct MapAnalyzer {
    refresh_interval: Duration,
    cache: Option<CachedPass>,
    metrics: Arc<Metrics>,
}

impl MapAnalyzer {
    pub fn new(refresh_interval: Duration, metrics: Arc<Metrics>) -> Self {
        Self {
            refresh_interval,
            cache: None,
            metrics,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Drop the cached pass so the next call rescans.
    pub fn force_update(&mut self) {
        tracing::debug!("Analysis cache invalidated");
        self.cache = None;
    }

    pub fn analyze(
        &mut self,
        source: &dyn ItemSource,
        config: &FilterConfiguration,
    ) -> &[AnalyzedMap] {
        self.analyze_at(source, config, Instant::now())
    }

    /// Same as [`analyze`](Self::analyze) with an explicit clock reading.
    pub fn analyze_at(
        &mut self,
        source: &dyn ItemSource,
        config: &FilterConfiguration,
        now: Instant,
    ) -> &[AnalyzedMap] {
        let fresh = self.cache.as_ref().is_some_and(|cached| {
            cached.config == *config
                && now.saturating_duration_since(cached.taken_at) < self.refresh_interval
        });

        if fresh {
            self.metrics.record_cache_hit();
        } else {
            let started = Instant::now();
            let maps = self.scan(source, config);
            self.metrics.record_pass(started.elapsed());

            tracing::debug!(
                "Analyzed {} maps with profile '{}' ({} passing)",
                maps.len(),
                config.name(),
                maps.iter().filter(|m| m.result.meets_criteria).count()
            );

            self.cache = Some(CachedPass {
                taken_at: now,
                config: config.clone(),
                maps,
            });
        }

        self.cache
            .as_ref()
            .map(|cached| cached.maps.as_slice())
            .unwrap_or_default()
    }

    fn scan(&self, source: &dyn ItemSource, config: &FilterConfiguration) -> Vec<AnalyzedMap> {
        // Stash is only read while the inventory panel is open
        let Some(inventory) = source.inventory_items() else {
            return Vec::new();
        };

        let stash = source.stash_items().unwrap_or_default();

        inventory
            .iter()
            .chain(stash.iter())
            .filter_map(|entry| self.analyze_item(entry, config))
            .collect()
    }

    fn analyze_item(
        &self,
        entry: &InventoryItem,
        config: &FilterConfiguration,
    ) -> Option<AnalyzedMap> {
        let record = extract_map(&entry.item)?;
        let result = evaluate(&record, config);

        self.metrics
            .record_map(result.meets_criteria, result.has_good_mods, result.has_bad_mods);

        Some(AnalyzedMap {
            location: entry.location,
            item_rarity: entry.item.item_rarity,
            record,
            result,
        })
    }
}

impl Default for MapAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL, Arc::new(Metrics::new()))
    }
}

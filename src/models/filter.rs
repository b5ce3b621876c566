use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest tier a map can have.
pub const MIN_MAP_TIER: i32 = 1;

/// Highest tier a map can have.
pub const MAX_MAP_TIER: i32 = 17;

/// Errors raised when building a [`FilterConfiguration`] from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Minimum tier {min} is greater than maximum tier {max}")]
    InvalidTierRange { min: i32, max: i32 },

    #[error("Tier {0} is outside the range 1..=17")]
    TierOutOfBounds(i32),

    #[error("Threshold {name} cannot be negative (got {value})")]
    NegativeThreshold { name: &'static str, value: i32 },
}

/// Numeric gates applied to a map before it is considered worth running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterThresholds {
    pub min_tier: i32,
    pub max_tier: i32,
    pub min_quantity: i32,
    pub min_rarity: i32,
    pub min_pack_size: i32,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_tier: MIN_MAP_TIER,
            max_tier: MAX_MAP_TIER,
            min_quantity: 0,
            min_rarity: 0,
            min_pack_size: 0,
        }
    }
}

impl FilterThresholds {
    /// Check tier bounds, tier ordering and non-negative minimums.
    pub fn validate(&self) -> Result<(), FilterError> {
        for tier in [self.min_tier, self.max_tier] {
            if !(MIN_MAP_TIER..=MAX_MAP_TIER).contains(&tier) {
                return Err(FilterError::TierOutOfBounds(tier));
            }
        }

        if self.min_tier > self.max_tier {
            return Err(FilterError::InvalidTierRange {
                min: self.min_tier,
                max: self.max_tier,
            });
        }

        for (name, value) in [
            ("min_quantity", self.min_quantity),
            ("min_rarity", self.min_rarity),
            ("min_pack_size", self.min_pack_size),
        ] {
            if value < 0 {
                return Err(FilterError::NegativeThreshold { name, value });
            }
        }

        Ok(())
    }
}

/// A named, immutable set of thresholds and mod keywords.
///
/// Once built, a configuration is never edited in place; switching profiles
/// or saving user edits replaces it wholesale. Construction through
/// [`FilterConfiguration::new`] guarantees `min_tier <= max_tier` with both
/// tiers inside `1..=17`.
///
/// # Related Types
///
/// - [`crate::profiles::ProfileStore`]: Catalog of preset configurations
/// - [`crate::services::evaluator::evaluate`]: Consumes a configuration to score maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfiguration {
    name: String,
    thresholds: FilterThresholds,
    good_mod_keywords: IndexSet<String>,
    bad_mod_keywords: IndexSet<String>,
}

impl FilterConfiguration {
    /// Build a configuration from thresholds and comma-separated keyword text.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if the tier range is inverted or out of bounds,
    /// or if any minimum is negative.
    pub fn new(
        name: impl Into<String>,
        thresholds: FilterThresholds,
        good_mods: &str,
        bad_mods: &str,
    ) -> Result<Self, FilterError> {
        thresholds.validate()?;
        Ok(Self::from_parts(name, thresholds, good_mods, bad_mods))
    }

    /// Construct without validation. Only used for the built-in presets,
    /// whose values are known to be in range.
    pub(crate) fn from_parts(
        name: impl Into<String>,
        thresholds: FilterThresholds,
        good_mods: &str,
        bad_mods: &str,
    ) -> Self {
        Self {
            name: name.into(),
            thresholds,
            good_mod_keywords: parse_keywords(good_mods),
            bad_mod_keywords: parse_keywords(bad_mods),
        }
    }

    /// Same configuration under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thresholds(&self) -> &FilterThresholds {
        &self.thresholds
    }

    pub fn min_tier(&self) -> i32 {
        self.thresholds.min_tier
    }

    pub fn max_tier(&self) -> i32 {
        self.thresholds.max_tier
    }

    pub fn min_quantity(&self) -> i32 {
        self.thresholds.min_quantity
    }

    pub fn min_rarity(&self) -> i32 {
        self.thresholds.min_rarity
    }

    pub fn min_pack_size(&self) -> i32 {
        self.thresholds.min_pack_size
    }

    pub fn good_mod_keywords(&self) -> &IndexSet<String> {
        &self.good_mod_keywords
    }

    pub fn bad_mod_keywords(&self) -> &IndexSet<String> {
        &self.bad_mod_keywords
    }

    /// Keyword lists joined back into the comma-separated form used in settings files
    pub fn good_mods_text(&self) -> String {
        join_keywords(&self.good_mod_keywords)
    }

    pub fn bad_mods_text(&self) -> String {
        join_keywords(&self.bad_mod_keywords)
    }
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self::from_parts("Custom", FilterThresholds::default(), "", "")
    }
}

/// Split comma-separated keyword text into an ordered set.
///
/// Entries are trimmed, blanks are dropped and exact duplicates keep their
/// first position.
pub fn parse_keywords(text: &str) -> IndexSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_keywords(keywords: &IndexSet<String>) -> String {
    keywords
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

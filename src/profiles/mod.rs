//! Built-in filter profiles and the user-editable Custom slot.
//!
//! The catalog is a closed set of [`ProfileKind`] variants. Lookups by name
//! never fail: an unknown name resolves to the Custom slot, matching the
//! settings menu behavior where a stale profile name simply falls back to the
//! user's own criteria.

use crate::models::{FilterConfiguration, FilterThresholds};
use indexmap::IndexMap;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Named filter presets, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
pub enum ProfileKind {
    #[default]
    Custom,
    Juicing,
    #[strum(serialize = "Boss Rush")]
    BossRush,
    #[strum(serialize = "Safe Farming")]
    SafeFarming,
    #[strum(serialize = "MF Farming")]
    MfFarming,
    Delirium,
    Speedrun,
}

impl ProfileKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Resolve a profile name, falling back to Custom for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or_else(|_| {
            tracing::debug!("Unknown profile '{}', falling back to Custom", name);
            Self::Custom
        })
    }

    /// Next profile in menu order, wrapping back to Custom after the last one.
    pub fn next(self) -> Self {
        let mut kinds = Self::iter().cycle().skip_while(|k| *k != self);
        kinds.next();
        kinds.next().unwrap_or_default()
    }
}

/// Preset catalog plus the mutable Custom slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    presets: IndexMap<ProfileKind, FilterConfiguration>,
    custom: FilterConfiguration,
}

impl ProfileStore {
    /// Create a store with every preset and a default Custom slot.
    pub fn new() -> Self {
        let presets = ProfileKind::iter()
            .filter(|kind| *kind != ProfileKind::Custom)
            .map(|kind| (kind, preset(kind)))
            .collect();
        Self {
            presets,
            custom: FilterConfiguration::default(),
        }
    }

    /// Profile names in stable menu order.
    pub fn list_profiles() -> Vec<&'static str> {
        ProfileKind::iter().map(ProfileKind::name).collect()
    }

    /// Look up a profile by display name. Unknown names return the Custom slot.
    pub fn get_profile(&self, name: &str) -> &FilterConfiguration {
        self.profile(ProfileKind::from_name(name))
    }

    pub fn profile(&self, kind: ProfileKind) -> &FilterConfiguration {
        self.presets.get(&kind).unwrap_or(&self.custom)
    }

    /// Overwrite the Custom slot. The stored copy is always named "Custom".
    pub fn set_custom(&mut self, config: &FilterConfiguration) {
        let custom = config.renamed(ProfileKind::Custom.name());
        tracing::info!(
            "Custom profile updated: tiers {}-{}, qty>={}, rarity>={}, pack>={}",
            custom.min_tier(),
            custom.max_tier(),
            custom.min_quantity(),
            custom.min_rarity(),
            custom.min_pack_size()
        );
        self.custom = custom;
    }

    pub fn custom(&self) -> &FilterConfiguration {
        &self.custom
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in preset values
fn preset(kind: ProfileKind) -> FilterConfiguration {
    let (thresholds, good, bad) = match kind {
        ProfileKind::Custom => return FilterConfiguration::default(),
        ProfileKind::Juicing => (
            thresholds(14, 17, 80, 0, 20),
            "beyond,breach,harbinger,legion,ritual,delirium,abyss,strongbox,shrine",
            "reflect,no regen,less recovery",
        ),
        ProfileKind::BossRush => (
            thresholds(14, 17, 60, 0, 0),
            "boss,unique,guardian,conqueror,elder,shaper",
            "reflect,no regen,reduced quantity,reduced rarity",
        ),
        ProfileKind::SafeFarming => (
            thresholds(1, 17, 40, 0, 0),
            "breach,harbinger,essence,metamorph",
            "reflect,no regen,temporal chains,cannot leech,reduced recovery,players are cursed,monsters cannot be stunned,monsters cannot be leeched from",
        ),
        ProfileKind::MfFarming => (
            thresholds(1, 17, 60, 40, 15),
            "rarity,quantity,pack,breach,legion,harbinger",
            "reflect,no regen,reduced quantity,reduced rarity",
        ),
        ProfileKind::Delirium => (
            thresholds(14, 17, 70, 0, 25),
            "beyond,breach,legion,abyss,harbinger,strongbox,additional monster packs",
            "players cannot regenerate,reduced recovery,temporal chains",
        ),
        ProfileKind::Speedrun => (
            thresholds(14, 17, 50, 0, 10),
            "quantity,pack,breach,legion",
            "temporal chains,chilled ground,reduced movement,players are cursed,monsters cannot be stunned,reflect",
        ),
    };

    FilterConfiguration::from_parts(kind.name(), thresholds, good, bad)
}

fn thresholds(
    min_tier: i32,
    max_tier: i32,
    min_quantity: i32,
    min_rarity: i32,
    min_pack_size: i32,
) -> FilterThresholds {
    FilterThresholds {
        min_tier,
        max_tier,
        min_quantity,
        min_rarity,
        min_pack_size,
    }
}

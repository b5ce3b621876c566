//! Data models for Mapscout.
//!
//! - [`FilterConfiguration`]: Immutable thresholds and keyword sets a map is judged against
//! - [`MapItemRecord`] / [`EvaluationResult`]: One map's stats and its verdict
//! - [`RawItem`] / [`InventoryItem`]: Items as the host reads them, before extraction
//! - [`PluginSettings`]: Settings persisted in `Mapscout Settings.yaml`
//! - [`OverlayState`]: Runtime toggles and the active profile, owned by
//!   [`StateManager`](crate::state::StateManager)

pub mod filter;
pub mod map_item;
pub mod overlay_state;
pub mod settings;

pub use filter::{
    FilterConfiguration, FilterError, FilterThresholds, MAX_MAP_TIER, MIN_MAP_TIER,
    parse_keywords,
};
pub use map_item::{
    AnalyzedMap, Container, EvaluationResult, InventoryItem, ItemLocation, ItemRarity,
    MapItemRecord, RawItem, RawMod,
};
pub use overlay_state::OverlayState;
pub use settings::{
    FilterSettings, GeneralSettings, HotkeyAction, HotkeySettings, PluginSettings,
    ProfileSettings, Rgba, VisualSettings,
};

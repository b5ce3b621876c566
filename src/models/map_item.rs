use serde::{Deserialize, Serialize};

/// Clean snapshot of one map item, produced fresh every analysis pass.
///
/// Stats are percentages as shown on the item. Negative or zero values are
/// legitimate low values, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapItemRecord {
    pub name: String,
    pub tier: i32,
    pub quantity: i32,
    pub rarity: i32,
    pub pack_size: i32,
    /// Human-readable modifier lines, in item order
    pub mods: Vec<String>,
}

/// Verdict and desirability of a map under one filter configuration.
///
/// Derived purely from `(MapItemRecord, FilterConfiguration)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub meets_criteria: bool,
    pub score: i64,
    pub has_good_mods: bool,
    pub has_bad_mods: bool,
}

/// Item frame rarity (normal/magic/rare/unique), distinct from the item rarity stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
}

/// A modifier as the host reads it from game memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMod {
    /// Internal mod identifier, e.g. `MapTier` or `MapIncreasedQuantity`
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub value: i32,
}

/// An item as the host sees it, before map detection and stat extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub base_name: String,
    #[serde(default)]
    pub item_rarity: ItemRarity,
    #[serde(default)]
    pub mods: Vec<RawMod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Container {
    Inventory,
    Stash,
}

/// Where an item sits. The host maps this back to a screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLocation {
    pub container: Container,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub location: ItemLocation,
    pub item: RawItem,
}

/// A map found during an analysis pass, with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedMap {
    pub location: ItemLocation,
    pub item_rarity: ItemRarity,
    pub record: MapItemRecord,
    pub result: EvaluationResult,
}

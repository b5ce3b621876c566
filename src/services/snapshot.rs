use crate::models::InventoryItem;
use crate::services::analysis::ItemSource;
use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;

/// Item source backed by a YAML snapshot of the inventory and stash panels.
///
/// A missing section means that panel was closed when the snapshot was taken.
///
/// ```yaml
/// inventory:
///   - location: { container: Inventory, slot: 0 }
///     item:
///       base_name: Strand Map
///       item_rarity: Rare
///       mods:
///         - { name: MapTier, value: 16 }
///         - { name: MapBreach, display_name: Area contains a Breach }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSource {
    #[serde(default)]
    pub inventory: Option<Vec<InventoryItem>>,

    #[serde(default)]
    pub stash: Option<Vec<InventoryItem>>,
}

impl SnapshotSource {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path))?;

        let snapshot: SnapshotSource = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot: {}", path))?;

        tracing::info!(
            "Loaded snapshot from {}: {} inventory items, {} stash items",
            path,
            snapshot.inventory.as_ref().map_or(0, Vec::len),
            snapshot.stash.as_ref().map_or(0, Vec::len)
        );
        Ok(snapshot)
    }
}

impl ItemSource for SnapshotSource {
    fn inventory_items(&self) -> Option<Vec<InventoryItem>> {
        self.inventory.clone()
    }

    fn stash_items(&self) -> Option<Vec<InventoryItem>> {
        self.stash.clone()
    }
}

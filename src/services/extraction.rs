use crate::models::{MapItemRecord, RawItem};
use regex::Regex;
use std::sync::LazyLock;

const TIER_MOD: &str = "MapTier";
const QUANTITY_MOD: &str = "IncreasedQuantity";
const RARITY_MOD: &str = "IncreasedRarity";
const PACK_SIZE_MOD: &str = "MonsterPackSize";

static TIER_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\s*tier\s+(\d+)\s*\)").expect("Invalid tier regex"));

/// Whether a base item name denotes a map
pub fn is_map(item: &RawItem) -> bool {
    item.base_name.contains("Map")
}

/// Turn a raw host item into a map record, or `None` if it is not a map.
///
/// Missing stats read as 0; mods without display text are skipped.
pub fn extract_map(item: &RawItem) -> Option<MapItemRecord> {
    if !is_map(item) {
        return None;
    }

    let record = MapItemRecord {
        name: item.base_name.clone(),
        tier: map_tier(item),
        quantity: stat_value(item, QUANTITY_MOD),
        rarity: stat_value(item, RARITY_MOD),
        pack_size: stat_value(item, PACK_SIZE_MOD),
        mods: item
            .mods
            .iter()
            .filter(|m| !m.display_name.is_empty())
            .map(|m| m.display_name.clone())
            .collect(),
    };

    tracing::trace!(
        "Extracted map '{}': T{} Q:{} R:{} P:{} ({} mods)",
        record.name,
        record.tier,
        record.quantity,
        record.rarity,
        record.pack_size,
        record.mods.len()
    );

    Some(record)
}

/// Tier from the first positive `MapTier` mod, else from "(Tier N)" in the name, else 0.
fn map_tier(item: &RawItem) -> i32 {
    if let Some(tier_mod) = item
        .mods
        .iter()
        .find(|m| m.name.contains(TIER_MOD) && m.value > 0)
    {
        return tier_mod.value;
    }

    TIER_IN_NAME
        .captures(&item.base_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn stat_value(item: &RawItem, stat_name: &str) -> i32 {
    item.mods
        .iter()
        .find(|m| m.name.contains(stat_name))
        .map(|m| m.value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRarity, RawMod};

    fn raw_mod(name: &str, display: &str, value: i32) -> RawMod {
        RawMod {
            name: name.to_string(),
            display_name: display.to_string(),
            value,
        }
    }

    fn strand_map() -> RawItem {
        RawItem {
            base_name: "Strand Map".to_string(),
            item_rarity: ItemRarity::Rare,
            mods: vec![
                raw_mod("MapTier", "", 16),
                raw_mod("MapIncreasedQuantity", "", 90),
                raw_mod("MapMonsterPackSize", "", 30),
                raw_mod("MapBreach", "Area contains a Breach", 0),
            ],
        }
    }

    #[test]
    fn test_non_map_ignored() {
        let item = RawItem {
            base_name: "Chaos Orb".to_string(),
            ..Default::default()
        };
        assert!(extract_map(&item).is_none());
    }

    #[test]
    fn test_extract_stats_and_mods() {
        let record = extract_map(&strand_map()).unwrap();
        assert_eq!(record.name, "Strand Map");
        assert_eq!(record.tier, 16);
        assert_eq!(record.quantity, 90);
        assert_eq!(record.rarity, 0);
        assert_eq!(record.pack_size, 30);
        assert_eq!(record.mods, vec!["Area contains a Breach".to_string()]);
    }

    #[test]
    fn test_first_matching_stat_wins() {
        let mut item = strand_map();
        item.mods.push(raw_mod("MapIncreasedQuantity", "", 10));
        assert_eq!(extract_map(&item).unwrap().quantity, 90);
    }

    #[test]
    fn test_tier_from_name_fallback() {
        let item = RawItem {
            base_name: "Crimson Temple Map (Tier 14)".to_string(),
            ..Default::default()
        };
        assert_eq!(extract_map(&item).unwrap().tier, 14);
    }

    #[test]
    fn test_zero_tier_mod_falls_back() {
        let item = RawItem {
            base_name: "Dunes Map".to_string(),
            mods: vec![raw_mod("MapTier", "", 0)],
            ..Default::default()
        };
        assert_eq!(extract_map(&item).unwrap().tier, 0);
    }
}

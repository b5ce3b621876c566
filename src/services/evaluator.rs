//! Map scoring against a filter configuration.
//!
//! [`evaluate`] is the whole contract: a pure, total function of a record and a
//! configuration. Threshold gating and scoring are independent, so a map can
//! score highly and still fail the gates; the overlay uses the verdict to
//! decide whether to draw and the score and mod flags to pick colors.

use crate::models::{EvaluationResult, FilterConfiguration, MapItemRecord};
use indexmap::IndexSet;

/// Score added for each mod line matching a good keyword
pub const GOOD_MOD_BONUS: i64 = 50;

/// Score removed for each mod line matching a bad keyword
pub const BAD_MOD_PENALTY: i64 = 100;

/// Evaluate a map record under a configuration.
///
/// Never fails and never panics. Negative stats or a tier of 0 are simply low
/// values.
pub fn evaluate(record: &MapItemRecord, config: &FilterConfiguration) -> EvaluationResult {
    let meets_criteria = meets_criteria(record, config);

    let mut score = base_score(record);
    let mut has_good_mods = false;
    let mut has_bad_mods = false;

    for mod_text in &record.mods {
        let lowered = mod_text.to_lowercase();

        if matches_lowered(&lowered, config.good_mod_keywords()) {
            score += GOOD_MOD_BONUS;
            has_good_mods = true;
        }

        if matches_lowered(&lowered, config.bad_mod_keywords()) {
            score -= BAD_MOD_PENALTY;
            has_bad_mods = true;
        }
    }

    EvaluationResult {
        meets_criteria,
        score,
        has_good_mods,
        has_bad_mods,
    }
}

/// Tier range plus the three stat minimums. A tier above the maximum is rejected.
pub fn meets_criteria(record: &MapItemRecord, config: &FilterConfiguration) -> bool {
    (config.min_tier()..=config.max_tier()).contains(&record.tier)
        && record.quantity >= config.min_quantity()
        && record.rarity >= config.min_rarity()
        && record.pack_size >= config.min_pack_size()
}

/// `quantity + rarity / 2 + pack_size * 2`, widened so no input overflows.
pub fn base_score(record: &MapItemRecord) -> i64 {
    // i64 division truncates toward zero, same as the stat display
    i64::from(record.quantity) + i64::from(record.rarity) / 2 + i64::from(record.pack_size) * 2
}

/// Case-insensitive substring match of a mod line against any keyword.
pub fn mod_matches(mod_text: &str, keywords: &IndexSet<String>) -> bool {
    matches_lowered(&mod_text.to_lowercase(), keywords)
}

fn matches_lowered(lowered: &str, keywords: &IndexSet<String>) -> bool {
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && lowered.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterThresholds, parse_keywords};
    use crate::profiles::ProfileStore;

    fn sample_record() -> MapItemRecord {
        MapItemRecord {
            name: "Strand Map".to_string(),
            tier: 16,
            quantity: 90,
            rarity: 0,
            pack_size: 30,
            mods: vec![
                "20% increased Rarity of Items found in this Area".to_string(),
                "Area contains a Breach".to_string(),
            ],
        }
    }

    fn config(good: &str, bad: &str) -> FilterConfiguration {
        FilterConfiguration::new("Test", FilterThresholds::default(), good, bad).unwrap()
    }

    #[test]
    fn test_juicing_example() {
        let store = ProfileStore::new();
        let result = evaluate(&sample_record(), store.get_profile("Juicing"));

        assert!(result.meets_criteria);
        assert_eq!(result.score, 200);
        assert!(result.has_good_mods);
        assert!(!result.has_bad_mods);
    }

    #[test]
    fn test_mf_farming_fails_criteria_but_still_scores() {
        let store = ProfileStore::new();
        let result = evaluate(&sample_record(), store.get_profile("MF Farming"));

        // rarity 0 < 40
        assert!(!result.meets_criteria);
        // 150 base, "rarity" matches mod 1, "breach" matches mod 2
        assert_eq!(result.score, 250);
        assert!(result.has_good_mods);
    }

    #[test]
    fn test_base_score_truncates_rarity() {
        let record = MapItemRecord {
            quantity: 10,
            rarity: 7,
            pack_size: 3,
            ..Default::default()
        };
        assert_eq!(base_score(&record), 10 + 3 + 6);

        let record = MapItemRecord {
            rarity: -7,
            ..Default::default()
        };
        assert_eq!(base_score(&record), -3);
    }

    #[test]
    fn test_mod_matching_both_classes() {
        let record = MapItemRecord {
            tier: 5,
            mods: vec!["Monsters reflect 18% of Elemental Damage; contains a Breach".to_string()],
            ..Default::default()
        };
        let result = evaluate(&record, &config("breach", "reflect"));

        assert_eq!(result.score, GOOD_MOD_BONUS - BAD_MOD_PENALTY);
        assert!(result.has_good_mods);
        assert!(result.has_bad_mods);
    }

    #[test]
    fn test_one_bonus_per_mod_line() {
        let record = MapItemRecord {
            tier: 5,
            mods: vec!["Breach beyond breach".to_string()],
            ..Default::default()
        };
        let result = evaluate(&record, &config("breach,beyond", ""));
        assert_eq!(result.score, GOOD_MOD_BONUS);
    }

    #[test]
    fn test_each_matching_line_counts() {
        let record = MapItemRecord {
            tier: 5,
            mods: vec![
                "Area contains a Breach".to_string(),
                "Area contains a Breach".to_string(),
            ],
            ..Default::default()
        };
        let result = evaluate(&record, &config("breach", ""));
        assert_eq!(result.score, 2 * GOOD_MOD_BONUS);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "pack" matches any mod containing the substring
        assert!(mod_matches("+25% Monster Pack Size", &parse_keywords("pack")));
        assert!(mod_matches("Area is Packed with Monsters", &parse_keywords("pack")));
        assert!(!mod_matches("Area contains a Breach", &parse_keywords("pack")));
    }

    #[test]
    fn test_tier_above_maximum_rejected() {
        let narrow = FilterConfiguration::new(
            "Narrow",
            FilterThresholds {
                min_tier: 1,
                max_tier: 10,
                ..Default::default()
            },
            "",
            "",
        )
        .unwrap();
        let record = MapItemRecord {
            tier: 11,
            ..Default::default()
        };
        assert!(!evaluate(&record, &narrow).meets_criteria);
    }

    #[test]
    fn test_tier_zero_is_low_value_not_error() {
        let record = MapItemRecord::default();
        let result = evaluate(&record, &FilterConfiguration::default());
        assert!(!result.meets_criteria);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let record = MapItemRecord {
            tier: i32::MAX,
            quantity: i32::MAX,
            rarity: i32::MAX,
            pack_size: i32::MAX,
            ..Default::default()
        };
        let result = evaluate(&record, &FilterConfiguration::default());
        let max = i64::from(i32::MAX);
        assert_eq!(result.score, max + max / 2 + max * 2);
    }
}

//! Property tests for map evaluation
//!
//! These tests verify:
//! - Evaluation is deterministic
//! - The criteria verdict is exactly the conjunction of the four threshold checks
//! - Breaking any single gate, including a tier above the maximum, fails the criteria
//! - Scoring is additive: base stats, +50 per good mod line, -100 per bad mod line

use mapscout::evaluate;
use mapscout::models::{FilterConfiguration, FilterThresholds, MapItemRecord};
use mapscout::services::{BAD_MOD_PENALTY, GOOD_MOD_BONUS};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_thresholds()(
        tiers in (1i32..=17, 1i32..=17),
        min_quantity in 0i32..200,
        min_rarity in 0i32..200,
        min_pack_size in 0i32..100
    ) -> FilterThresholds {
        let (a, b) = tiers;
        FilterThresholds {
            min_tier: a.min(b),
            max_tier: a.max(b),
            min_quantity,
            min_rarity,
            min_pack_size,
        }
    }
}

prop_compose! {
    fn arb_config()(thresholds in arb_thresholds()) -> FilterConfiguration {
        FilterConfiguration::new(
            "Prop",
            thresholds,
            "breach,legion,harbinger",
            "reflect,no regen",
        )
        .unwrap()
    }
}

// Mods drawn from words that never contain any configured keyword
prop_compose! {
    fn arb_neutral_mods()(
        mods in proptest::collection::vec("(Area|Monsters|Players) (deal|take|gain) [0-9]{1,3}% (fire|cold) damage", 0..6)
    ) -> Vec<String> {
        mods
    }
}

prop_compose! {
    fn arb_record()(
        tier in -2i32..20,
        quantity in -50i32..300,
        rarity in -50i32..300,
        pack_size in -20i32..100,
        mods in arb_neutral_mods()
    ) -> MapItemRecord {
        MapItemRecord {
            name: "Prop Map".to_string(),
            tier,
            quantity,
            rarity,
            pack_size,
            mods,
        }
    }
}

/// A record inside every gate of `config`, with stats `margin` above the minimums.
fn passing_record(config: &FilterConfiguration, mods: Vec<String>, margin: i32) -> MapItemRecord {
    MapItemRecord {
        name: "Passing Map".to_string(),
        tier: config.max_tier(),
        quantity: config.min_quantity() + margin,
        rarity: config.min_rarity() + margin,
        pack_size: config.min_pack_size() + margin,
        mods,
    }
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(record in arb_record(), config in arb_config()) {
        prop_assert_eq!(evaluate(&record, &config), evaluate(&record, &config));
    }

    #[test]
    fn criteria_is_conjunction_of_thresholds(record in arb_record(), config in arb_config()) {
        let expected = record.tier >= config.min_tier()
            && record.tier <= config.max_tier()
            && record.quantity >= config.min_quantity()
            && record.rarity >= config.min_rarity()
            && record.pack_size >= config.min_pack_size();

        prop_assert_eq!(evaluate(&record, &config).meets_criteria, expected);
    }

    #[test]
    fn failing_one_threshold_fails_criteria(
        config in arb_config(),
        mods in arb_neutral_mods(),
        margin in 0i32..50,
        miss in 1i32..50
    ) {
        let passing = passing_record(&config, mods, margin);
        prop_assert!(evaluate(&passing, &config).meets_criteria);

        let failures: [(&str, fn(&mut MapItemRecord, &FilterConfiguration, i32)); 5] = [
            ("tier below min", |r, c, miss| r.tier = c.min_tier() - miss),
            ("tier above max", |r, c, miss| r.tier = c.max_tier() + miss),
            ("quantity", |r, c, miss| r.quantity = c.min_quantity() - miss),
            ("rarity", |r, c, miss| r.rarity = c.min_rarity() - miss),
            ("pack size", |r, c, miss| r.pack_size = c.min_pack_size() - miss),
        ];

        for (gate, fail) in failures {
            let mut record = passing.clone();
            fail(&mut record, &config, miss);
            prop_assert!(
                !evaluate(&record, &config).meets_criteria,
                "{} should fail the criteria: {:?}",
                gate,
                record
            );
        }
    }

    #[test]
    fn neutral_mods_give_base_score(record in arb_record(), config in arb_config()) {
        let result = evaluate(&record, &config);
        let expected = i64::from(record.quantity)
            + i64::from(record.rarity) / 2
            + i64::from(record.pack_size) * 2;

        prop_assert_eq!(result.score, expected);
        prop_assert!(!result.has_good_mods);
        prop_assert!(!result.has_bad_mods);
    }

    #[test]
    fn good_mod_adds_fifty(record in arb_record(), config in arb_config()) {
        let before = evaluate(&record, &config);
        let mut with_good = record.clone();
        with_good.mods.push("Area contains a BREACH".to_string());
        let after = evaluate(&with_good, &config);

        prop_assert_eq!(after.score - before.score, GOOD_MOD_BONUS);
        prop_assert!(after.has_good_mods);
        prop_assert_eq!(after.meets_criteria, before.meets_criteria);
    }

    #[test]
    fn bad_mod_subtracts_hundred(record in arb_record(), config in arb_config()) {
        let before = evaluate(&record, &config);
        let mut with_bad = record.clone();
        with_bad.mods.push("Monsters reflect 18% of Physical Damage".to_string());
        let after = evaluate(&with_bad, &config);

        prop_assert_eq!(before.score - after.score, BAD_MOD_PENALTY);
        prop_assert!(after.has_bad_mods);
    }

    #[test]
    fn mixed_mod_nets_minus_fifty(record in arb_record(), config in arb_config()) {
        let before = evaluate(&record, &config);
        let mut mixed = record.clone();
        mixed.mods.push("Legion monsters reflect damage".to_string());
        let after = evaluate(&mixed, &config);

        prop_assert_eq!(after.score - before.score, -50);
        prop_assert!(after.has_good_mods && after.has_bad_mods);
    }
}

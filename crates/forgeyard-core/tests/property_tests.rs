//! Property tests for the fuzzy matcher and the capability scorer.

use chrono::Utc;
use forgeyard_core::{
    CapabilityEntry, ContactInfo, FuzzyMatcher, ManufacturerRecord, ManufacturerScorer,
};
use proptest::prelude::*;
use uuid::Uuid;

/// Materials that are pairwise far apart under the blended distance, so
/// exact coverage can be controlled from a test.
const MATERIAL_POOL: &[&str] = &["steel", "cotton", "granite", "plywood", "ceramic", "titanium"];

/// Requested items guaranteed to match nothing in `MATERIAL_POOL`.
const MISS_POOL: &[&str] = &["xxxxxx", "qqqqqq", "kkkkkk", "wwwwww"];

fn entry(name: &str, materials: Vec<String>, tools: Vec<String>) -> CapabilityEntry {
    CapabilityEntry {
        name: name.into(),
        materials,
        tools,
    }
}

fn record_with(entries: Vec<CapabilityEntry>) -> ManufacturerRecord {
    let now = Utc::now();
    ManufacturerRecord {
        id: Uuid::new_v4(),
        name: "Prop Works".into(),
        industry: "Fabrication".into(),
        location: "Pune".into(),
        contact: ContactInfo {
            email: "ops@propworks.example".into(),
            phone: "+91 20 5550 0100".into(),
        },
        rating: 3.0,
        operations: entries,
        created_at: now,
        updated_at: now,
    }
}

fn pool_strings() -> Vec<String> {
    MATERIAL_POOL.iter().map(|s| s.to_string()).collect()
}

/// Score a materials-only request against a fixed pool entry. The entry
/// name never matches and no tools are requested, so the whole score is
/// the materials term.
fn materials_term(requested: &[String]) -> f64 {
    let m = record_with(vec![entry("Other", pool_strings(), vec!["press".into()])]);
    ManufacturerScorer::default().score(&m, "Unrelated", &[], requested)
}

proptest! {
    #[test]
    fn prop_distance_is_symmetric(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
        let m = FuzzyMatcher::default();
        prop_assert!((m.distance(&a, &b) - m.distance(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn prop_distance_is_bounded(a in "[a-zA-Z ]{0,16}", b in "[a-zA-Z ]{0,16}") {
        let d = FuzzyMatcher::default().distance(&a, &b);
        prop_assert!(d >= -1e-9 && d <= 1.0 + 1e-9);
    }

    #[test]
    fn prop_identical_strings_have_zero_distance(s in "[a-zA-Z ]{0,16}") {
        prop_assert!(FuzzyMatcher::default().distance(&s, &s).abs() < 1e-12);
    }

    // Raising the threshold admits a superset of candidates, so a hit can
    // neither disappear nor change: the closest candidate stays closest.
    #[test]
    fn prop_raising_the_threshold_never_loses_a_match(
        query in "[a-z ]{1,12}",
        candidates in prop::collection::vec("[a-z ]{1,12}", 1..6),
        t1 in 0.0f64..=1.0,
        slack in 0.0f64..=1.0,
    ) {
        let t2 = (t1 + slack).min(1.0);
        let strict = FuzzyMatcher::new(t1);
        let lenient = FuzzyMatcher::new(t2);
        if let Some(hit) = strict.best_match(&query, &candidates) {
            prop_assert_eq!(lenient.best_match(&query, &candidates), Some(hit));
        }
    }

    #[test]
    fn prop_operation_term_is_all_or_nothing(name in "[A-Za-z]{1,12}", same: bool) {
        let m = record_with(vec![entry(&name, vec!["steel".into()], vec!["press".into()])]);
        let requested = if same { name.clone() } else { format!("{name}-other") };
        let score = ManufacturerScorer::default().score(&m, &requested, &[], &[]);
        prop_assert!(score == 0.0 || score == 20.0);
    }

    #[test]
    fn prop_materials_term_stays_in_range(
        requested in prop::collection::vec("[a-z]{1,8}", 0..6),
        offered in prop::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let m = record_with(vec![entry("Other", offered, vec!["press".into()])]);
        let score = ManufacturerScorer::default().score(&m, "Unrelated", &[], &requested);
        prop_assert!(score >= 0.0);
        prop_assert!(score <= 30.0 + 1e-9);
        // The cliff leaves nothing strictly between zero and 70% of the weight.
        prop_assert!(score == 0.0 || score >= 0.7 * 30.0 - 1e-9);
    }

    #[test]
    fn prop_tools_term_stays_in_range(
        requested in prop::collection::vec("[a-z]{1,8}", 0..6),
        offered in prop::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let m = record_with(vec![entry("Other", vec!["steel".into()], offered)]);
        let score = ManufacturerScorer::default().score(&m, "Unrelated", &requested, &[]);
        prop_assert!(score >= 0.0);
        prop_assert!(score <= 50.0 + 1e-9);
        prop_assert!(score == 0.0 || score >= 0.7 * 50.0 - 1e-9);
    }

    #[test]
    fn prop_single_entry_score_is_bounded(
        op in "[A-Za-z ]{1,10}",
        name in "[A-Za-z ]{1,10}",
        materials in prop::collection::vec("[a-z]{1,8}", 0..4),
        tools in prop::collection::vec("[a-z]{1,8}", 0..4),
        offered_materials in prop::collection::vec("[a-z]{1,8}", 1..4),
        offered_tools in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let m = record_with(vec![entry(&name, offered_materials, offered_tools)]);
        let score = ManufacturerScorer::default().score(&m, &op, &tools, &materials);
        prop_assert!(score >= 0.0);
        prop_assert!(score <= 100.0 + 1e-9);
    }

    // Pins the additive model: n identical entries score n times one entry,
    // with no cap on the total.
    #[test]
    fn prop_duplicate_entries_accumulate_linearly(copies in 1usize..=4) {
        let e = entry(
            "Welding",
            vec!["steel".into()],
            vec!["torch".into(), "press".into()],
        );
        let requested_tools = vec!["torch".into(), "press".into()];
        let requested_materials = vec!["steel".into()];

        let scorer = ManufacturerScorer::default();
        let single = scorer.score(
            &record_with(vec![e.clone()]),
            "Welding",
            &requested_tools,
            &requested_materials,
        );
        let multi = scorer.score(
            &record_with(vec![e; copies]),
            "Welding",
            &requested_tools,
            &requested_materials,
        );
        prop_assert!((multi - single * copies as f64).abs() < 1e-6);
        prop_assert!(single == 100.0);
    }

    #[test]
    fn prop_uncoverable_request_item_never_raises_the_score(
        requested in prop::sample::subsequence(
            MATERIAL_POOL.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            0..=6,
        ),
        miss_idx in 0usize..4,
    ) {
        let before = materials_term(&requested);

        let mut widened = requested.clone();
        widened.push(MISS_POOL[miss_idx].to_string());
        let after = materials_term(&widened);

        prop_assert!(after <= before + 1e-9);
    }

    #[test]
    fn prop_covered_request_item_never_lowers_the_score(
        requested in prop::sample::subsequence(
            MATERIAL_POOL.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            0..=6,
        ),
        include_miss: bool,
        hit_idx in 0usize..6,
    ) {
        let mut requested = requested;
        if include_miss {
            requested.push(MISS_POOL[0].to_string());
        }
        let before = materials_term(&requested);

        let mut widened = requested.clone();
        widened.push(MATERIAL_POOL[hit_idx].to_string());
        let after = materials_term(&widened);

        prop_assert!(after >= before - 1e-9);
    }
}

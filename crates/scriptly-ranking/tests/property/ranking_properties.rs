use proptest::prelude::*;
use scriptly_core::{IntensityLevel, ScriptRecord, Vocabulary};
use scriptly_ranking::RankingEngine;

/// Words drawn partly from the built-in vocabulary so generated queries
/// and records actually collide with it sometimes.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("meltdown".to_string()),
        Just("bedtime".to_string()),
        Just("screaming".to_string()),
        Just("sleep".to_string()),
        Just("store".to_string()),
        Just("again".to_string()),
        "[a-z]{1,8}",
    ]
}

fn arb_intensity() -> impl Strategy<Value = IntensityLevel> {
    prop_oneof![
        Just(IntensityLevel::None),
        Just(IntensityLevel::Moderate),
        Just(IntensityLevel::Severe),
    ]
}

prop_compose! {
    fn arb_record()(
        id in "[a-z0-9]{8}",
        title in word(),
        category in word(),
        tags in proptest::collection::vec(word(), 0..3),
        execution_time_secs in proptest::option::of(0u32..600),
        intensity in proptest::option::of(arb_intensity()),
        works_in_public in proptest::option::of(any::<bool>()),
        emergency_suitable in proptest::option::of(any::<bool>()),
    ) -> ScriptRecord {
        ScriptRecord {
            id,
            title,
            category,
            situation_trigger: None,
            tags,
            execution_time_secs,
            intensity,
            location_tags: vec![],
            works_in_public,
            caregiver_state_tags: vec![],
            emergency_suitable,
        }
    }
}

fn arb_query() -> impl Strategy<Value = String> {
    proptest::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn ranked_output_is_a_subset_of_candidates(
        query in arb_query(),
        candidates in proptest::collection::vec(arb_record(), 0..12),
    ) {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);
        let ranked = engine.rank(&query, &candidates);

        prop_assert!(ranked.len() <= candidates.len());
        for record in &ranked {
            prop_assert!(
                candidates.iter().any(|c| std::ptr::eq(c, *record)),
                "ranked record '{}' not borrowed from the candidate slice",
                record.id
            );
        }
    }

    #[test]
    fn nonempty_query_never_keeps_zero_scores_and_orders_descending(
        query in arb_query(),
        candidates in proptest::collection::vec(arb_record(), 0..12),
    ) {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);
        let ranked = engine.rank_scored(&query, &candidates);

        for window in ranked.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
        for r in &ranked {
            prop_assert!(r.score > 0, "zero-score record '{}' survived", r.record.id);
        }
    }

    #[test]
    fn ranking_is_invariant_under_case_folding(
        query in arb_query(),
        candidates in proptest::collection::vec(arb_record(), 0..10),
    ) {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);

        let lower: Vec<&str> = engine
            .rank(&query, &candidates)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        let upper: Vec<&str> = engine
            .rank(&query.to_uppercase(), &candidates)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn empty_query_is_the_identity(
        candidates in proptest::collection::vec(arb_record(), 0..12),
    ) {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);
        let ranked = engine.rank("", &candidates);

        prop_assert_eq!(ranked.len(), candidates.len());
        for (got, expected) in ranked.iter().zip(&candidates) {
            prop_assert!(std::ptr::eq(*got, expected));
        }
    }

    #[test]
    fn suggestions_are_bounded_and_contain_the_needle(needle in "[a-z]{2,6}") {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);
        let suggestions = engine.suggest(&needle);

        prop_assert!(suggestions.len() <= 5);
        for phrase in &suggestions {
            prop_assert!(phrase.contains(&needle));
        }
    }

    #[test]
    fn emergency_classification_ignores_candidates(
        query in arb_query(),
        candidates in proptest::collection::vec(arb_record(), 0..8),
    ) {
        let vocab = Vocabulary::builtin();
        let engine = RankingEngine::new(&vocab);

        let before = engine.is_emergency(&query);
        let _ = engine.rank(&query, &candidates);
        prop_assert_eq!(engine.is_emergency(&query), before);
    }
}

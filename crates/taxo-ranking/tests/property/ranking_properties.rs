use std::sync::Arc;

use proptest::prelude::*;
use taxo_core::category::RawCategory;
use taxo_core::config::{PolicyTable, RankingConfig};
use taxo_ranking::{Canonicalizer, RankingEngine};
use test_fixtures::StubEngine;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..5).prop_map(|segments| format!("Top/{}", segments.join("/")))
}

/// A weight-descending raw stream, weights on a coarse grid so exact ties
/// occur regularly.
fn stream_strategy() -> impl Strategy<Value = Vec<RawCategory>> {
    prop::collection::vec((path_strategy(), 0u32..1000), 0..40).prop_map(|pairs| {
        let mut categories: Vec<RawCategory> = pairs
            .into_iter()
            .map(|(path, w)| RawCategory::new(path, f64::from(w) / 1000.0))
            .collect();
        categories.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap());
        categories
    })
}

fn ranker(stream: Vec<RawCategory>) -> RankingEngine {
    RankingEngine::new(
        Arc::new(StubEngine::with_categories(stream)),
        PolicyTable::default(),
        RankingConfig::default(),
    )
}

proptest! {
    #[test]
    fn output_is_bounded(stream in stream_strategy(), max_cats in 1usize..6) {
        let groups = ranker(stream).classify("doc", max_cats).unwrap();
        prop_assert!(groups.len() <= max_cats);
    }

    #[test]
    fn output_is_sorted_by_descending_weight(stream in stream_strategy(), max_cats in 1usize..6) {
        let groups = ranker(stream).classify("doc", max_cats).unwrap();
        for pair in groups.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn raising_the_cutoff_never_adds_groups(
        stream in stream_strategy(),
        max_cats in 1usize..6,
        low in 0.0f64..0.5,
        delta in 0.0f64..0.5,
    ) {
        let high = low + delta;
        let engine = ranker(stream);
        let loose: Vec<String> = engine
            .classify_with_cutoff("doc", max_cats, low)
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        let strict = engine.classify_with_cutoff("doc", max_cats, high).unwrap();
        for group in strict {
            prop_assert!(loose.contains(&group.name));
        }
    }

    #[test]
    fn groups_anchor_on_their_first_entry(stream in stream_strategy(), max_cats in 1usize..6) {
        let groups = ranker(stream.clone()).classify("doc", max_cats).unwrap();
        for group in groups {
            let anchor = stream
                .iter()
                .find(|raw| taxo_core::category::OutputGroup::name_for(&raw.path) == group.name)
                .expect("group name must come from the stream");
            prop_assert_eq!(group.weight, anchor.weight);
        }
    }

    #[test]
    fn canonicalization_is_idempotent(path in path_strategy()) {
        let canonicalizer = Canonicalizer::new(Vec::new());
        let once = canonicalizer.canonical_label(&path);
        prop_assert_eq!(canonicalizer.canonical_label(&once), once.clone());
    }
}

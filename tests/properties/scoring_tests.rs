use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use sitesearch::index::{Entry, Index};
use sitesearch::search::{Scorer, rank};

fn arb_entry() -> impl Strategy<Value = Entry> {
    (
        "[a-z ]{0,20}",
        "[a-z ]{0,20}",
        "[a-z ]{0,40}",
        prop::collection::vec("[a-z]{1,6}", 0..3),
    )
        .prop_map(|(title, summary, content, tags)| Entry {
            title,
            summary,
            content,
            tags,
            ..Entry::default()
        })
}

proptest! {
    #[test]
    fn test_empty_terms_score_zero(entry in arb_entry()) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        prop_assert_eq!(Scorer::default().score(&entry, &[], now), 0);
    }

    #[test]
    fn test_score_is_additive_over_terms(
        entry in arb_entry(),
        a in "[a-z]{1,3}",
        b in "[a-z]{1,3}",
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let scorer = Scorer::default();
        let both = scorer.score(&entry, &[a.clone(), b.clone()], now);
        let split = scorer.score(&entry, &[a], now) + scorer.score(&entry, &[b], now);
        prop_assert_eq!(both, split);
    }

    #[test]
    fn test_rank_is_sorted_and_positive(
        entries in prop::collection::vec(arb_entry(), 0..12),
        term in "[a-z]{1,2}",
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let index = Index::new(entries);
        let ranked = rank(&index, &[term], &Scorer::default(), now);
        prop_assert!(ranked.iter().all(|scored| scored.score > 0));
        prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn test_rank_is_deterministic(
        entries in prop::collection::vec(arb_entry(), 0..12),
        term in "[a-z]{1,2}",
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let index = Index::new(entries);
        let scorer = Scorer::default();
        let first: Vec<_> = rank(&index, &[term.clone()], &scorer, now)
            .iter()
            .map(|scored| scored.entry.clone())
            .collect();
        let second: Vec<_> = rank(&index, &[term], &scorer, now)
            .iter()
            .map(|scored| scored.entry.clone())
            .collect();
        prop_assert_eq!(first, second);
    }
}

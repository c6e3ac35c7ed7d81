use std::collections::HashSet;
use std::sync::Arc;

use super::model::{AffinityTable, CartSnapshot};
use super::services::CandidateShuffler;
use crate::domain::shared::value_objects::ProductId;

/// Builds the deduplicated candidate pool for a cart.
///
/// Business rules:
/// - Related lists of every cart item found in the table are concatenated in cart order
/// - If nothing was found, the whole catalog is the pool
/// - Duplicates are dropped, keeping the first occurrence
/// - Products already in the cart are never candidates
///
/// The result depends only on its inputs.
pub fn candidate_pool(cart: &CartSnapshot, table: &AffinityTable) -> Vec<ProductId> {
    let mut raw: Vec<&ProductId> = cart
        .iter()
        .filter_map(|id| table.related(id))
        .flatten()
        .collect();

    // Fallback only when no cart item matched; partial pools are not topped up.
    if raw.is_empty() {
        raw = table.catalog().iter().collect();
    }

    let in_cart: HashSet<&ProductId> = cart.iter().collect();
    let mut seen = HashSet::new();

    raw.into_iter()
        .filter(|id| !in_cart.contains(id))
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Selects related products for a cart from the static affinity table.
pub struct RecommendationEngine {
    table: Arc<AffinityTable>,
    shuffler: Arc<dyn CandidateShuffler>,
}

impl RecommendationEngine {
    pub fn new(table: Arc<AffinityTable>, shuffler: Arc<dyn CandidateShuffler>) -> Self {
        Self { table, shuffler }
    }

    /// Returns at most `limit` distinct products, none of them in `cart`,
    /// sampled uniformly from the candidate pool.
    pub fn recommend(&self, cart: &CartSnapshot, limit: usize) -> Vec<ProductId> {
        if limit == 0 {
            return Vec::new();
        }

        let mut candidates = candidate_pool(cart, &self.table);
        self.shuffler.shuffle(&mut candidates);
        candidates.truncate(limit);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::recommendation::services::SeededShuffler;

    fn pid(id: &str) -> ProductId {
        ProductId::parse(id).unwrap()
    }

    fn set(ids: &[&str]) -> HashSet<ProductId> {
        ids.iter().map(|s| pid(s)).collect()
    }

    fn cart(ids: &[&str]) -> CartSnapshot {
        CartSnapshot::from_raw(ids.iter().copied())
    }

    fn sample_table() -> Arc<AffinityTable> {
        let catalog = ["A", "B", "C", "D", "E"].map(String::from);
        let affinities = vec![
            ("A".to_string(), vec!["B".to_string(), "C".to_string()]),
            ("B".to_string(), vec!["A".to_string(), "D".to_string()]),
        ];
        Arc::new(AffinityTable::new(catalog, affinities).unwrap())
    }

    fn engine(seed: u64) -> RecommendationEngine {
        RecommendationEngine::new(sample_table(), Arc::new(SeededShuffler::new(seed)))
    }

    #[test]
    fn should_recommend_related_products_of_single_item() {
        let result = engine(1).recommend(&cart(&["A"]), 5);

        assert_eq!(result.len(), 2);
        assert_eq!(result.into_iter().collect::<HashSet<_>>(), set(&["B", "C"]));
    }

    #[test]
    fn should_remove_cart_items_from_combined_related_lists() {
        let result = engine(2).recommend(&cart(&["A", "B"]), 5);

        assert_eq!(result.len(), 2);
        assert_eq!(result.into_iter().collect::<HashSet<_>>(), set(&["C", "D"]));
    }

    #[test]
    fn should_fall_back_to_catalog_for_unknown_item() {
        let result = engine(3).recommend(&cart(&["Z"]), 5);

        assert_eq!(result.len(), 5);
        assert_eq!(
            result.into_iter().collect::<HashSet<_>>(),
            set(&["A", "B", "C", "D", "E"])
        );
    }

    #[test]
    fn should_draw_from_catalog_when_cart_is_empty() {
        let result = engine(4).recommend(&CartSnapshot::default(), 3);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|id| set(&["A", "B", "C", "D", "E"]).contains(id)));
    }

    #[test]
    fn should_return_empty_when_limit_is_zero() {
        assert!(engine(5).recommend(&cart(&["A"]), 0).is_empty());
        assert!(engine(5).recommend(&CartSnapshot::default(), 0).is_empty());
    }

    #[test]
    fn should_not_top_up_from_catalog_when_related_items_are_all_in_cart() {
        let table = Arc::new(
            AffinityTable::new(
                ["A", "B", "C"].map(String::from),
                vec![
                    ("A".to_string(), vec!["B".to_string()]),
                    ("B".to_string(), vec!["A".to_string()]),
                ],
            )
            .unwrap(),
        );
        let engine = RecommendationEngine::new(table, Arc::new(SeededShuffler::new(6)));

        assert!(engine.recommend(&cart(&["A", "B"]), 5).is_empty());
    }

    #[test]
    fn should_fall_back_to_catalog_when_entry_has_empty_list() {
        let table = Arc::new(
            AffinityTable::new(
                ["A", "B", "C"].map(String::from),
                vec![("A".to_string(), Vec::<String>::new())],
            )
            .unwrap(),
        );
        let engine = RecommendationEngine::new(table, Arc::new(SeededShuffler::new(8)));

        let result = engine.recommend(&cart(&["A"]), 5);

        assert_eq!(result.into_iter().collect::<HashSet<_>>(), set(&["B", "C"]));
    }

    #[test]
    fn should_build_identical_pool_for_identical_input() {
        let table = sample_table();
        let first = candidate_pool(&cart(&["B", "A", "B"]), &table);
        let second = candidate_pool(&cart(&["B", "A", "B"]), &table);

        assert_eq!(first, second);
        assert_eq!(first, vec![pid("D"), pid("C")]);
    }

    #[test]
    fn should_sample_each_candidate_with_roughly_equal_frequency() {
        let engine = engine(42);
        let trials = 10_000;
        let limit = 2;
        let mut counts: HashMap<ProductId, usize> = HashMap::new();

        for _ in 0..trials {
            for id in engine.recommend(&cart(&["Z"]), limit) {
                *counts.entry(id).or_default() += 1;
            }
        }

        // 5 candidates, 2 slots: each is expected 4000 times.
        assert_eq!(counts.len(), 5);
        for (id, count) in counts {
            assert!(
                (3_600..=4_400).contains(&count),
                "{} appeared {} times",
                id,
                count
            );
        }
    }

    fn arb_table() -> impl Strategy<Value = AffinityTable> {
        let id = "[A-H]";
        (
            prop::collection::vec(id, 1..8),
            prop::collection::hash_map(id, prop::collection::vec(id, 0..5), 0..6),
        )
            .prop_map(|(catalog, affinities)| AffinityTable::new(catalog, affinities).unwrap())
    }

    proptest! {
        #[test]
        fn should_respect_result_invariants(
            table in arb_table(),
            raw_cart in prop::collection::vec("[A-J]", 0..6),
            limit in 0usize..8,
            seed in any::<u64>(),
        ) {
            let cart = CartSnapshot::from_raw(raw_cart);
            let pool = candidate_pool(&cart, &table);
            let engine = RecommendationEngine::new(
                Arc::new(table.clone()),
                Arc::new(SeededShuffler::new(seed)),
            );

            let result = engine.recommend(&cart, limit);
            let unique: HashSet<&ProductId> = result.iter().collect();

            prop_assert!(result.len() <= limit);
            prop_assert!(result.len() <= pool.len());
            prop_assert_eq!(unique.len(), result.len());
            prop_assert!(result.iter().all(|id| !cart.contains(id)));
            prop_assert!(result.iter().all(|id| pool.contains(id)));
            prop_assert_eq!(result.is_empty(), pool.is_empty() || limit == 0);
        }

        #[test]
        fn should_only_use_related_lists_when_any_cart_item_matches(
            table in arb_table(),
            raw_cart in prop::collection::vec("[A-J]", 1..6),
        ) {
            let cart = CartSnapshot::from_raw(raw_cart);
            let related: HashSet<&ProductId> = cart
                .iter()
                .filter_map(|id| table.related(id))
                .flatten()
                .collect();
            prop_assume!(!related.is_empty());

            let pool = candidate_pool(&cart, &table);

            prop_assert!(pool.iter().all(|id| related.contains(id)));
        }
    }
}

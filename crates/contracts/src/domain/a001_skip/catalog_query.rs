use super::aggregate::Skip;
use crate::enums::sort_order::SortOrder;
use serde::{Deserialize, Serialize};

/// Two independent filter toggles. Enabled filters are combined with AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkipFilter {
    pub road_legal_only: bool,
    pub heavy_waste_only: bool,
}

impl SkipFilter {
    pub fn matches(&self, skip: &Skip) -> bool {
        if self.road_legal_only && !skip.allowed_on_road {
            return false;
        }
        if self.heavy_waste_only && !skip.allows_heavy_waste {
            return false;
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.road_legal_only || self.heavy_waste_only
    }
}

/// Filter and sort settings of the skip size page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub filter: SkipFilter,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Filters `skips` and orders the rest by gross price.
    ///
    /// The sort is stable, so skips with equal gross price keep the order
    /// the endpoint sent them in.
    pub fn apply(&self, skips: &[Skip]) -> Vec<Skip> {
        let mut visible: Vec<Skip> = skips
            .iter()
            .filter(|skip| self.filter.matches(skip))
            .cloned()
            .collect();

        visible.sort_by(|a, b| {
            let cmp = a.gross_price().total_cmp(&b.gross_price());
            match self.sort {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
        visible
    }

    pub fn toggle_road_legal(&mut self) {
        self.filter.road_legal_only = !self.filter.road_legal_only;
    }

    pub fn toggle_heavy_waste(&mut self) {
        self.filter.heavy_waste_only = !self.filter.heavy_waste_only;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// `false` once any filter is on or the sort is not the default one;
    /// the "Clear Filters" button is shown only then.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_skip::aggregate::test_skip;

    fn catalog() -> Vec<Skip> {
        vec![
            test_skip(1, 278.0, 20.0, true, true),
            test_skip(2, 311.0, 20.0, false, true),
            test_skip(3, 200.0, 20.0, true, false),
            test_skip(4, 436.0, 20.0, false, false),
            test_skip(5, 215.0, 0.0, true, true),
        ]
    }

    fn ids(skips: &[Skip]) -> Vec<i64> {
        skips.iter().map(|s| s.id.value()).collect()
    }

    fn all_queries() -> Vec<CatalogQuery> {
        let mut out = Vec::new();
        for road in [false, true] {
            for heavy in [false, true] {
                for sort in SortOrder::all() {
                    out.push(CatalogQuery {
                        filter: SkipFilter {
                            road_legal_only: road,
                            heavy_waste_only: heavy,
                        },
                        sort,
                    });
                }
            }
        }
        out
    }

    #[test]
    fn test_filtered_set_is_subset_satisfying_predicates() {
        let input = catalog();
        for query in all_queries() {
            let visible = query.apply(&input);
            for skip in &visible {
                assert!(input.contains(skip));
                if query.filter.road_legal_only {
                    assert!(skip.allowed_on_road);
                }
                if query.filter.heavy_waste_only {
                    assert!(skip.allows_heavy_waste);
                }
            }
            let expected = input.iter().filter(|s| query.filter.matches(s)).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let input = catalog();
        let mut visible = ids(&CatalogQuery::default().apply(&input));
        visible.sort();
        assert_eq!(visible, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_both_filters_are_combined_with_and() {
        let mut query = CatalogQuery::default();
        query.toggle_road_legal();
        query.toggle_heavy_waste();
        assert_eq!(ids(&query.apply(&catalog())), vec![5, 1]);
    }

    #[test]
    fn test_sort_by_gross_price() {
        let mut query = CatalogQuery::default();
        // gross: 1 -> 333.6, 2 -> 373.2, 3 -> 240, 4 -> 523.2, 5 -> 215
        assert_eq!(ids(&query.apply(&catalog())), vec![5, 3, 1, 2, 4]);
        query.set_sort(SortOrder::Descending);
        assert_eq!(ids(&query.apply(&catalog())), vec![4, 2, 1, 3, 5]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending_for_unique_prices() {
        let input = catalog();
        for query in all_queries() {
            let asc = CatalogQuery {
                sort: SortOrder::Ascending,
                ..query
            }
            .apply(&input);
            let mut desc = CatalogQuery {
                sort: SortOrder::Descending,
                ..query
            }
            .apply(&input);
            desc.reverse();
            assert_eq!(asc, desc);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            test_skip(10, 100.0, 20.0, true, true),
            test_skip(11, 100.0, 20.0, true, true),
            test_skip(12, 50.0, 20.0, true, true),
        ];
        assert_eq!(ids(&CatalogQuery::default().apply(&input)), vec![12, 10, 11]);
    }

    #[test]
    fn test_heavy_waste_filter_scenario() {
        let input = vec![test_skip(1, 200.0, 20.0, true, false)];
        let mut query = CatalogQuery::default();
        let visible = query.apply(&input);
        assert_eq!(visible.len(), 1);
        assert_eq!(format!("{:.2}", visible[0].gross_price()), "240.00");

        query.toggle_heavy_waste();
        assert!(query.apply(&input).is_empty());
    }

    #[test]
    fn test_is_default_and_reset() {
        let mut query = CatalogQuery::default();
        assert!(query.is_default());

        query.set_sort(SortOrder::Descending);
        assert!(!query.is_default());
        query.reset();
        assert!(query.is_default());

        query.toggle_road_legal();
        assert!(!query.is_default());
        assert!(query.filter.is_active());
        query.toggle_road_legal();
        assert!(query.is_default());
    }

    #[test]
    fn test_empty_input() {
        for query in all_queries() {
            assert!(query.apply(&[]).is_empty());
        }
    }
}

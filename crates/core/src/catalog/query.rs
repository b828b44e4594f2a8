use serde::{Deserialize, Serialize};

use crate::catalog::filter::{filter_products, CategoryFilter};
use crate::catalog::sort::{sort_products, SortKey};
use crate::domain::product::Product;

/// The caller-side state of a catalog query, passed in explicitly instead of
/// living in hidden UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl QueryParams {
    /// Build params from the raw strings a UI hands over: the `"all"`
    /// sentinel selects no category filter and unrecognized sort spellings
    /// fall back to name ordering.
    pub fn from_selection(search: &str, selected_category: &str, sort_by: &str) -> Self {
        Self {
            search: search.to_owned(),
            category: CategoryFilter::parse(selected_category),
            sort: SortKey::parse(sort_by),
        }
    }
}

/// Filter then sort, each exactly once. Pure: the same snapshot and params
/// always produce the same view, and the snapshot itself is never touched.
/// Zero matches come back as an empty vector.
pub fn query_products(products: &[Product], params: &QueryParams) -> Vec<Product> {
    let mut view = filter_products(products, &params.search, &params.category);
    sort_products(&mut view, params.sort);
    view
}

pub trait QueryEngine: Send + Sync {
    fn query(&self, products: &[Product], params: &QueryParams) -> Vec<Product>;
}

#[derive(Default)]
pub struct DeterministicQueryEngine;

impl QueryEngine for DeterministicQueryEngine {
    fn query(&self, products: &[Product], params: &QueryParams) -> Vec<Product> {
        query_products(products, params)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{query_products, DeterministicQueryEngine, QueryEngine, QueryParams};
    use crate::catalog::filter::CategoryFilter;
    use crate::catalog::sort::SortKey;
    use crate::domain::product::{Product, ProductId};

    fn product(id: u64, name: &str, category: &str, regular: i64, sale: Option<i64>) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_owned(),
            description: format!("{name} subscription"),
            category: category.to_owned(),
            regular_price: Decimal::from(regular),
            sale_price: sale.map(Decimal::from),
            image: String::new(),
            external_url: String::new(),
            button_text: None,
        }
    }

    fn storefront() -> Vec<Product> {
        vec![
            product(1, "Runway ML Unlimited", "AI Tools", 8000, Some(1600)),
            product(2, "Adobe Creative Cloud", "Software", 4500, Some(999)),
            product(3, "Prime Video Yearly", "Indian OTT", 1500, Some(649)),
            product(4, "Adobe Acrobat Pro", "Software", 1800, None),
            product(5, "Grammarly Premium", "Writing Tools", 1200, None),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn from_selection_applies_sentinel_and_fallback() {
        let params = QueryParams::from_selection("adobe", "all", "bogus");
        assert_eq!(params.search, "adobe");
        assert_eq!(params.category, CategoryFilter::All);
        assert_eq!(params.sort, SortKey::Name);

        let params = QueryParams::from_selection("", "Software", "price-high");
        assert_eq!(params.category, CategoryFilter::Exact("Software".to_owned()));
        assert_eq!(params.sort, SortKey::PriceHigh);
    }

    #[test]
    fn default_query_returns_the_whole_snapshot_name_ordered() {
        let products = storefront();
        let view = query_products(&products, &QueryParams::default());
        assert_eq!(view.len(), products.len());
        assert_eq!(ids(&view), vec![4, 2, 5, 3, 1]);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let products = storefront();
        let params = QueryParams::from_selection("a", "all", "discount");
        assert_eq!(query_products(&products, &params), query_products(&products, &params));
    }

    #[test]
    fn query_leaves_the_snapshot_untouched() {
        let products = storefront();
        let before = products.clone();
        let _ = query_products(&products, &QueryParams::from_selection("", "all", "price-low"));
        assert_eq!(products, before);
    }

    #[test]
    fn combined_filter_requires_both_predicates() {
        let products = storefront();
        let params = QueryParams::from_selection("adobe", "Software", "name");
        let view = query_products(&products, &params);
        assert_eq!(ids(&view), vec![4, 2]);
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let products = storefront();
        let params = QueryParams::from_selection("zzzznomatch", "all", "name");
        assert!(query_products(&products, &params).is_empty());
    }

    #[test]
    fn empty_snapshot_is_a_valid_input() {
        let view = query_products(&[], &QueryParams::default());
        assert!(view.is_empty());
    }

    #[test]
    fn engine_trait_matches_the_free_function() {
        let products = storefront();
        let params = QueryParams::from_selection("", "all", "price-high");
        let engine = DeterministicQueryEngine;
        assert_eq!(engine.query(&products, &params), query_products(&products, &params));
    }
}

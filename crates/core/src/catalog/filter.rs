use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Reserved category selection meaning "no category filter applied".
pub const ALL_CATEGORIES: &str = "all";

/// Category side of the filter. `Exact` compares the label verbatim: category
/// labels are case-sensitive and never normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Exact(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl CategoryFilter {
    pub fn parse(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(selection.to_owned())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Exact(label) => product.category == *label,
        }
    }
}

/// Text side of the filter: the search text (lower-cased, not trimmed) must
/// appear in the lower-cased name, description, or category. Empty search
/// matches everything.
pub fn matches_search(product: &Product, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

/// Both predicates must hold. Survivors keep their relative feed order; the
/// source slice is never reordered or mutated.
pub fn filter_products(
    products: &[Product],
    search: &str,
    category: &CategoryFilter,
) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_search(product, search) && category.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{filter_products, matches_search, CategoryFilter};
    use crate::domain::product::{Product, ProductId};

    fn product(id: u64, name: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            regular_price: Decimal::from(1000),
            sale_price: None,
            image: String::new(),
            external_url: String::new(),
            button_text: None,
        }
    }

    fn storefront() -> Vec<Product> {
        vec![
            product(1, "Adobe Creative Cloud", "Full design suite", "Software"),
            product(2, "CapCut Pro", "Video editor with adobe-style presets", "Video Editing"),
            product(3, "Ahrefs Lite", "Backlink research", "SEO"),
            product(4, "Adobe Express", "Quick social graphics", "Software"),
        ]
    }

    #[test]
    fn empty_search_matches_every_product() {
        let products = storefront();
        assert!(products.iter().all(|p| matches_search(p, "")));
    }

    #[test]
    fn search_is_case_insensitive_across_name_description_and_category() {
        let products = storefront();
        assert!(matches_search(&products[0], "ADOBE"));
        assert!(matches_search(&products[1], "Adobe")); // description hit
        assert!(matches_search(&products[2], "seo")); // category hit
        assert!(!matches_search(&products[2], "adobe"));
    }

    #[test]
    fn search_does_not_trim_whitespace() {
        let products = storefront();
        // " adobe" only matches where a space precedes the word.
        assert!(!matches_search(&products[0], " adobe"));
        assert!(matches_search(&products[1], " adobe"));
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let products = storefront();
        let software = CategoryFilter::parse("Software");
        assert!(software.matches(&products[0]));
        assert!(!software.matches(&products[1]));
        assert!(!CategoryFilter::parse("software").matches(&products[0]));
    }

    #[test]
    fn all_sentinel_disables_category_filtering() {
        let products = storefront();
        let filter = CategoryFilter::parse("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(products.iter().all(|p| filter.matches(p)));
    }

    #[test]
    fn predicates_combine_with_and() {
        let products = storefront();
        let view = filter_products(&products, "adobe", &CategoryFilter::parse("Software"));
        let ids: Vec<u64> = view.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn filtering_preserves_feed_order() {
        let products = storefront();
        let view = filter_products(&products, "adobe", &CategoryFilter::All);
        let ids: Vec<u64> = view.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn no_survivors_is_an_empty_view_not_an_error() {
        let products = storefront();
        let view = filter_products(&products, "zzzznomatch", &CategoryFilter::All);
        assert!(view.is_empty());
    }
}

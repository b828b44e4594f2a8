pub mod filter;
pub mod pricing;
pub mod query;
pub mod sort;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::product::{Product, ProductId};

/// A category label with how many products carry it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub product_count: usize,
}

/// The immutable catalog snapshot, loaded once at startup. The snapshot owns
/// its records; queries and views always derive new sequences from it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    /// Products sharing the category of `product_id`, the product itself
    /// excluded, in feed order, capped at `limit`. Unknown ids have no
    /// related products.
    pub fn related(&self, product_id: ProductId, limit: usize) -> Vec<&Product> {
        let Some(subject) = self.find(product_id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|product| product.category == subject.category && product.id != product_id)
            .take(limit)
            .collect()
    }

    /// Distinct category labels, lexicographically sorted.
    pub fn categories(&self) -> Vec<String> {
        self.category_summaries().into_iter().map(|summary| summary.name).collect()
    }

    /// Categories with product counts, sorted by label.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(name, product_count)| CategorySummary { name: name.to_owned(), product_count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Catalog, CategorySummary};
    use crate::domain::product::{Product, ProductId};

    fn product(id: u64, name: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_owned(),
            description: String::new(),
            category: category.to_owned(),
            regular_price: Decimal::from(1000),
            sale_price: None,
            image: String::new(),
            external_url: String::new(),
            button_text: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "ChatGPT Plus", "AI Tools"),
            product(2, "Netflix Premium", "Indian OTT"),
            product(3, "Perplexity Pro", "AI Tools"),
            product(4, "Midjourney Standard", "AI Tools"),
            product(5, "Hotstar Super", "Indian OTT"),
            product(6, "Runway ML", "AI Tools"),
            product(7, "Gemini Advanced", "AI Tools"),
            product(8, "Claude Pro", "AI Tools"),
        ])
    }

    #[test]
    fn finds_products_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.find(ProductId(2)).map(|p| p.name.as_str()), Some("Netflix Premium"));
        assert_eq!(catalog.find(ProductId(99)), None);
    }

    #[test]
    fn related_shares_category_excludes_self_and_caps() {
        let catalog = catalog();
        let related = catalog.related(ProductId(3), 4);
        let ids: Vec<u64> = related.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 4, 6, 7]);
    }

    #[test]
    fn related_for_unknown_id_is_empty() {
        let catalog = catalog();
        assert!(catalog.related(ProductId(404), 4).is_empty());
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["AI Tools".to_owned(), "Indian OTT".to_owned()]);
    }

    #[test]
    fn category_summaries_carry_counts() {
        let catalog = catalog();
        assert_eq!(
            catalog.category_summaries(),
            vec![
                CategorySummary { name: "AI Tools".to_owned(), product_count: 6 },
                CategorySummary { name: "Indian OTT".to_owned(), product_count: 2 },
            ]
        );
    }
}

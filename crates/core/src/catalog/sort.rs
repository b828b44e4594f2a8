use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::pricing::{effective_price, product_discount_percent};
use crate::domain::product::Product;

/// The four ordering policies the storefront offers. Closed enumeration:
/// adding a policy means adding a variant and a comparator here, nothing
/// string-keyed anywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Discount,
}

impl SortKey {
    /// Total parse: the four recognized spellings map to their policy, any
    /// other value falls back to name ordering so a stale caller state can
    /// never break the catalog view.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "discount" => Self::Discount,
            _ => Self::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Discount => "discount",
        }
    }

    /// Fixed comparator table, one entry per policy.
    pub fn comparator(self) -> fn(&Product, &Product) -> Ordering {
        match self {
            Self::Name => compare_name,
            Self::PriceLow => compare_price_low,
            Self::PriceHigh => compare_price_high,
            Self::Discount => compare_discount,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ascending, human-oriented: compares the lowercased names so case never
/// splits otherwise-identical titles. Exact ties keep feed order via the
/// stable sort.
fn compare_name(left: &Product, right: &Product) -> Ordering {
    left.name.to_lowercase().cmp(&right.name.to_lowercase())
}

fn compare_price_low(left: &Product, right: &Product) -> Ordering {
    effective_price(left).cmp(&effective_price(right))
}

fn compare_price_high(left: &Product, right: &Product) -> Ordering {
    effective_price(right).cmp(&effective_price(left))
}

/// Biggest discount first. Undiscounted products all carry 0 and therefore
/// gather at the tail in feed order.
fn compare_discount(left: &Product, right: &Product) -> Ordering {
    product_discount_percent(right).cmp(&product_discount_percent(left))
}

/// In-place stable sort of an already-derived view. `slice::sort_by` keeps
/// the relative order of equal elements, which is what makes repeated
/// renders of the same query visually identical.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    products.sort_by(key.comparator());
}

pub mod catalog;
pub mod config;
pub mod domain;
pub mod fixtures;
pub mod source;

pub use catalog::filter::{filter_products, matches_search, CategoryFilter, ALL_CATEGORIES};
pub use catalog::pricing::{discount_percent, effective_price, product_discount_percent};
pub use catalog::query::{query_products, DeterministicQueryEngine, QueryEngine, QueryParams};
pub use catalog::sort::{sort_products, SortKey};
pub use catalog::{Catalog, CategorySummary};
pub use config::{AppConfig, ConfigError, LoadOptions, LogFormat};
pub use domain::category::{category_for_slug, slug_for_category};
pub use domain::product::{Product, ProductId};
pub use source::{load_products, LoadOutcome, SkippedRecord, SourceError};

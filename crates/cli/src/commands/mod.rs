pub mod categories;
pub mod config;
pub mod doctor;
pub mod query;
pub mod show;

use std::path::PathBuf;

use dreamstore_core::catalog::pricing::{effective_price, product_discount_percent};
use dreamstore_core::config::AppConfig;
use dreamstore_core::domain::product::{Product, ProductId};
use dreamstore_core::source::{self, SkippedRecord, SourceError};
use dreamstore_core::{fixtures, Catalog};
use rust_decimal::Decimal;
use serde::Serialize;

pub(crate) const EXIT_CONFIG_FAILURE: u8 = 2;
pub(crate) const EXIT_SOURCE_FAILURE: u8 = 3;
pub(crate) const EXIT_NOT_FOUND: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: String,
    message: String,
}

impl CommandResult {
    /// Successful commands print their own payloads; every failure goes
    /// through this envelope so callers can parse one shape.
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: error_class.to_string(),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Where the snapshot came from, for operator-facing output.
#[derive(Debug, Clone)]
pub(crate) enum CatalogOrigin {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin demo snapshot"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub(crate) struct LoadedCatalog {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
    pub origin: CatalogOrigin,
}

/// Load the configured snapshot: a JSON feed when `catalog.data_path` is
/// set, the built-in demo snapshot otherwise. Skipped feed records are
/// logged here once so every command behaves the same.
pub(crate) fn load_catalog(config: &AppConfig) -> Result<LoadedCatalog, SourceError> {
    match &config.catalog.data_path {
        Some(path) => {
            let outcome = source::load_products(path)?;
            for skipped in &outcome.skipped {
                tracing::warn!(
                    index = skipped.index,
                    reason = %skipped.reason,
                    "skipped catalog record"
                );
            }
            Ok(LoadedCatalog {
                catalog: Catalog::new(outcome.products),
                skipped: outcome.skipped,
                origin: CatalogOrigin::File(path.clone()),
            })
        }
        None => {
            tracing::debug!("no catalog.data_path configured, serving builtin demo snapshot");
            Ok(LoadedCatalog {
                catalog: Catalog::new(fixtures::demo_catalog()),
                skipped: Vec::new(),
                origin: CatalogOrigin::Builtin,
            })
        }
    }
}

/// A product record enriched with the derived pricing fields the storefront
/// shows next to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub regular_price: Decimal,
    pub sale_price: Option<Decimal>,
    pub effective_price: Decimal,
    pub discount_percent: u32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            regular_price: product.regular_price,
            sale_price: product.sale_price,
            effective_price: effective_price(product),
            discount_percent: product_discount_percent(product),
        }
    }
}

/// One human-readable listing line: effective price first, struck-through
/// regular price and badge only when a discount applies.
pub(crate) fn render_product_line(product: &Product) -> String {
    let discount = product_discount_percent(product);
    if discount > 0 {
        format!(
            "{} [{}] ₹{} (was ₹{}, {}% off)",
            product.name,
            product.category,
            effective_price(product),
            product.regular_price,
            discount
        )
    } else {
        format!("{} [{}] ₹{}", product.name, product.category, effective_price(product))
    }
}

use dreamstore_core::catalog::query::{DeterministicQueryEngine, QueryEngine, QueryParams};
use dreamstore_core::config::{AppConfig, LoadOptions};
use dreamstore_core::domain::category::category_for_slug;
use serde::Serialize;

use super::{
    load_catalog, render_product_line, CommandResult, ProductView, EXIT_CONFIG_FAILURE,
    EXIT_SOURCE_FAILURE,
};

#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub search: String,
    pub category: String,
    pub slug: Option<String>,
    pub sort: String,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    params: QueryParams,
    matched: usize,
    total: usize,
    products: Vec<ProductView>,
}

pub fn run(args: QueryArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "query",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG_FAILURE,
            )
        }
    };

    let loaded = match load_catalog(&config) {
        Ok(loaded) => loaded,
        Err(error) => {
            return CommandResult::failure(
                "query",
                "catalog_source",
                error.to_string(),
                EXIT_SOURCE_FAILURE,
            )
        }
    };

    let selection = resolve_selection(&args);
    let params = QueryParams::from_selection(&args.search, &selection, &args.sort);
    let view = DeterministicQueryEngine.query(loaded.catalog.products(), &params);

    if args.json {
        let response = QueryResponse {
            params,
            matched: view.len(),
            total: loaded.catalog.len(),
            products: view.iter().map(ProductView::from).collect(),
        };
        let output = serde_json::to_string_pretty(&response)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    let mut lines = vec![format!(
        "Showing {} of {} products ({})",
        view.len(),
        loaded.catalog.len(),
        loaded.origin
    )];
    if view.is_empty() {
        lines.push("No products found".to_string());
    }
    for product in &view {
        lines.push(format!("  {}", render_product_line(product)));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

/// A resolvable deep-link slug wins over the raw category selection; an
/// unknown slug changes nothing, exactly like a stale storefront URL.
fn resolve_selection(args: &QueryArgs) -> String {
    if let Some(slug) = &args.slug {
        if let Some(label) = category_for_slug(slug) {
            return label.to_owned();
        }
    }
    args.category.clone()
}

use dreamstore_core::config::{AppConfig, LoadOptions};
use dreamstore_core::domain::category::slug_for_category;
use serde::Serialize;

use super::{load_catalog, CommandResult, EXIT_CONFIG_FAILURE, EXIT_SOURCE_FAILURE};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryView {
    name: String,
    slug: Option<&'static str>,
    product_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoriesResponse {
    total_products: usize,
    categories: Vec<CategoryView>,
}

pub fn run(json: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "categories",
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
                "categories",
                "catalog_source",
                error.to_string(),
                EXIT_SOURCE_FAILURE,
            )
        }
    };

    let categories: Vec<CategoryView> = loaded
        .catalog
        .category_summaries()
        .into_iter()
        .map(|summary| CategoryView {
            slug: slug_for_category(&summary.name),
            name: summary.name,
            product_count: summary.product_count,
        })
        .collect();

    if json {
        let response =
            CategoriesResponse { total_products: loaded.catalog.len(), categories };
        let output = serde_json::to_string_pretty(&response)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    let mut lines = vec![format!(
        "{} categories, {} products ({})",
        categories.len(),
        loaded.catalog.len(),
        loaded.origin
    )];
    for category in &categories {
        match category.slug {
            Some(slug) => {
                lines.push(format!("  {} ({}) [{slug}]", category.name, category.product_count))
            }
            None => lines.push(format!("  {} ({})", category.name, category.product_count)),
        }
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

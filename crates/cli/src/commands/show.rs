use dreamstore_core::config::{AppConfig, LoadOptions};
use dreamstore_core::domain::product::ProductId;
use serde::Serialize;

use super::{
    load_catalog, render_product_line, CommandResult, ProductView, EXIT_CONFIG_FAILURE,
    EXIT_NOT_FOUND, EXIT_SOURCE_FAILURE,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowResponse {
    product: ProductView,
    description: String,
    related: Vec<ProductView>,
}

pub fn run(id: u64, json: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "show",
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
                "show",
                "catalog_source",
                error.to_string(),
                EXIT_SOURCE_FAILURE,
            )
        }
    };

    let product_id = ProductId(id);
    let Some(product) = loaded.catalog.find(product_id) else {
        return CommandResult::failure(
            "show",
            "not_found",
            format!("no product with id {id}"),
            EXIT_NOT_FOUND,
        );
    };

    let related = loaded.catalog.related(product_id, config.catalog.related_limit);

    if json {
        let response = ShowResponse {
            product: ProductView::from(product),
            description: product.description.clone(),
            related: related.iter().map(|p| ProductView::from(*p)).collect(),
        };
        let output = serde_json::to_string_pretty(&response)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    let mut lines = vec![render_product_line(product)];
    if !product.description.is_empty() {
        lines.push(format!("  {}", product.description));
    }
    if !related.is_empty() {
        lines.push("Related products:".to_string());
        for other in &related {
            lines.push(format!("  {}", render_product_line(other)));
        }
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

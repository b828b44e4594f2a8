use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::product::Product;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
}

/// A feed record the loader refused, with enough context to chase it in the
/// upstream export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedRecord>,
}

/// Load a catalog snapshot from a JSON array of product records.
///
/// An unreadable file or a malformed document is a hard error. A record that
/// fails to deserialize, or that reuses an id already seen, is skipped and
/// reported instead: one bad record must not take down the whole catalog.
pub fn load_products(path: &Path) -> Result<LoadOutcome, SourceError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| SourceError::ReadFile { path: path.to_path_buf(), source })?;

    let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .map_err(|source| SourceError::ParseFile { path: path.to_path_buf(), source })?;

    let mut outcome = LoadOutcome::default();
    let mut seen_ids = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Product>(record) {
            Ok(product) => {
                if seen_ids.insert(product.id) {
                    outcome.products.push(product);
                } else {
                    outcome.skipped.push(SkippedRecord {
                        index,
                        reason: format!("duplicate product id {}", product.id),
                    });
                }
            }
            Err(error) => {
                outcome.skipped.push(SkippedRecord { index, reason: error.to_string() });
            }
        }
    }

    Ok(outcome)
}

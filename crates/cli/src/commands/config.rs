use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dreamstore_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    let data_path = match &config.catalog.data_path {
        Some(path) => path.display().to_string(),
        None => "<builtin demo snapshot>".to_string(),
    };
    lines.push(render_line(
        "catalog.data_path",
        &data_path,
        field_source(
            "catalog.data_path",
            &["DREAMSTORE_CATALOG_PATH"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "catalog.related_limit",
        &config.catalog.related_limit.to_string(),
        field_source(
            "catalog.related_limit",
            &["DREAMSTORE_CATALOG_RELATED_LIMIT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["DREAMSTORE_LOGGING_LEVEL", "DREAMSTORE_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_lowercase(),
        field_source(
            "logging.format",
            &["DREAMSTORE_LOGGING_FORMAT", "DREAMSTORE_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn render_line(field: &str, value: &str, source: String) -> String {
    format!("  {field} = {value}  ({source})")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("dreamstore.toml"), PathBuf::from("config/dreamstore.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let raw = fs::read_to_string(path?).ok()?;
    raw.parse::<Value>().ok()
}

/// Attribute a field to the highest-precedence source that set it: the first
/// non-empty env var, else the config file when it carries the key, else the
/// built-in default.
fn field_source(
    field: &str,
    env_vars: &[&str],
    doc: Option<&Value>,
    path: Option<&Path>,
) -> String {
    for var in env_vars {
        if env::var(var).map(|value| !value.trim().is_empty()).unwrap_or(false) {
            return format!("env:{var}");
        }
    }

    if let (Some(doc), Some(path)) = (doc, path) {
        if file_has_field(doc, field) {
            return format!("file:{}", path.display());
        }
    }

    "default".to_string()
}

fn file_has_field(doc: &Value, field: &str) -> bool {
    let mut current = doc;
    for segment in field.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

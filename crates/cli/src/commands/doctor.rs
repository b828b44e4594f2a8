use dreamstore_core::config::{AppConfig, LoadOptions};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{load_catalog, LoadedCatalog};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                error.to_string().replace('"', "\\\"")
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });

            match load_catalog(&config) {
                Ok(loaded) => {
                    checks.push(DoctorCheck {
                        name: "catalog_source",
                        status: CheckStatus::Pass,
                        details: format!(
                            "{} products loaded from {}",
                            loaded.catalog.len(),
                            loaded.origin
                        ),
                    });
                    checks.push(check_snapshot_integrity(&loaded));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_source",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(DoctorCheck {
                        name: "snapshot_integrity",
                        status: CheckStatus::Skipped,
                        details: "skipped because the catalog source did not load".to_string(),
                    });
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "catalog_source",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "snapshot_integrity",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

/// Data-quality sweep over the loaded snapshot: records the loader refused,
/// sale prices above the regular price (the discount badge clamps to 0 for
/// these), and non-positive regular prices.
fn check_snapshot_integrity(loaded: &LoadedCatalog) -> DoctorCheck {
    let mut findings = Vec::new();

    if !loaded.skipped.is_empty() {
        findings.push(format!("{} records skipped by the loader", loaded.skipped.len()));
    }

    let inverted_sales = loaded
        .catalog
        .products()
        .iter()
        .filter(|p| matches!(p.sale_price, Some(sale) if sale > p.regular_price))
        .count();
    if inverted_sales > 0 {
        findings.push(format!("{inverted_sales} records with sale price above regular price"));
    }

    let priceless = loaded
        .catalog
        .products()
        .iter()
        .filter(|p| p.regular_price <= Decimal::ZERO)
        .count();
    if priceless > 0 {
        findings.push(format!("{priceless} records with non-positive regular price"));
    }

    if findings.is_empty() {
        DoctorCheck {
            name: "snapshot_integrity",
            status: CheckStatus::Pass,
            details: "no integrity findings".to_string(),
        }
    } else {
        DoctorCheck {
            name: "snapshot_integrity",
            status: CheckStatus::Fail,
            details: findings.join("; "),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = vec![report.summary.clone()];
    for check in &report.checks {
        let status = match check.status {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "SKIP",
        };
        lines.push(format!("  [{status}] {}: {}", check.name, check.details));
    }
    lines.join("\n")
}

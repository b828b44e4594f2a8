pub mod commands;

use clap::{Parser, Subcommand};
use dreamstore_core::config::{AppConfig, LoadOptions};
use dreamstore_core::ALL_CATEGORIES;
use std::process::ExitCode;

use commands::query::QueryArgs;

#[derive(Debug, Parser)]
#[command(
    name = "dreamstore",
    about = "Dreamstore catalog CLI",
    long_about = "Query, inspect, and health-check the Dreamstore product catalog.",
    after_help = "Examples:\n  dreamstore query --search adobe --category Software\n  dreamstore query --slug ai-tools --sort discount --json\n  dreamstore show 7\n  dreamstore categories --json\n  dreamstore doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run a filtered, sorted catalog query and print the resulting view")]
    Query {
        #[arg(long, default_value = "", help = "Free-text search over name, description, and category")]
        search: String,
        #[arg(
            long,
            default_value = ALL_CATEGORIES,
            help = "Exact category label, or `all` for no filter"
        )]
        category: String,
        #[arg(long, help = "Category deep-link slug; wins over --category when it resolves")]
        slug: Option<String>,
        #[arg(long, default_value = "name", help = "name | price-low | price-high | discount")]
        sort: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show one product with its related products")]
    Show {
        #[arg(help = "Product id")]
        id: u64,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List catalog categories with product counts")]
    Categories {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config, catalog source, and snapshot integrity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

fn init_logging(config: &AppConfig) {
    use dreamstore_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            let _ = tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .compact()
                .try_init();
        }
        Pretty => {
            let _ = tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .pretty()
                .try_init();
        }
        Json => {
            let _ = tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .json()
                .try_init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Commands validate configuration themselves; logging falls back to
    // defaults when the config cannot load so the failure still gets printed.
    let logging_config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    init_logging(&logging_config);

    let result = match cli.command {
        Command::Query { search, category, slug, sort, json } => {
            commands::query::run(QueryArgs { search, category, slug, sort, json })
        }
        Command::Show { id, json } => commands::show::run(id, json),
        Command::Categories { json } => commands::categories::run(json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

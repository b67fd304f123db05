use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod api;
mod cli;
mod config;
mod setup;

use api::error::IntoErrorResponse;
use api::product::handlers;
use cli::{Cli, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Inventory CLI Entry Point
///
/// Restores the inventory from the configured store, runs one command and
/// prints the refreshed table or dashboard.
///
/// - config/: Environment configuration (store path, currency)
/// - setup/: Dependency wiring
/// - api/: Command arguments, handlers, rendering and error mapping
fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing on stderr with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    config.storage = config.storage.with_overrides(cli.store, cli.dry_run);

    // 4. Wire dependencies
    let DependencyContainer { mut repository } = DependencyContainer::new(&config.storage)?;
    let display = &config.display;

    // 5. Run command
    let result = match cli.command {
        Command::Add(product) => handlers::add_product(&mut repository, product, display),
        Command::Update { id, product } => {
            handlers::update_product(&mut repository, id, product, display)
        }
        Command::Remove { id } => handlers::remove_product(&mut repository, id, display),
        Command::Show { id } => handlers::show_product(&repository, id, display),
        Command::List(list) => Ok(handlers::list_products(&repository, &list, display)),
        Command::Summary => Ok(handlers::summarize(&repository, display)),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let response = err.into_error_response();
            tracing::debug!(name = %response.name, message = %response.message, "Command failed");
            eprintln!("{}", response);
            Ok(ExitCode::from(response.exit_code))
        }
    }
}

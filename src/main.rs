use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod cart;
mod commands;
mod config;
mod constants;
mod format;
mod platform;
mod state;
mod storage;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    cart::CartStore,
    config::AppConfig,
    constants::LOGO,
    format::format_compact_quantity,
    platform::{AppPaths, ClipboardManager},
    state::App,
    storage::FileStorage,
};

// Picart version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
const LOG_ENV_VAR: &str = "PICART_LOG";

/// Picart - a shopping cart in your terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run; starts the interactive cart when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the cart file and log
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the items in the cart
    List,
    /// Print the configuration file path, writing defaults if it is missing
    Config,
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        println!("{LOGO}");
        println!("Picart v{VERSION}");
        println!("A shopping cart for your terminal");
        return Ok(());
    }

    if matches!(cli.command, Some(Commands::Config)) {
        return print_config_path(&AppPaths::new());
    }

    let config = AppConfig::load(&AppPaths::new());
    let paths = AppPaths::with_data_dir(config.resolve_data_dir(cli.data_dir));
    setup_tracing(&paths);

    let storage = FileStorage::new(paths.data_dir()?);
    tracing::info!(path = ?storage.dir(), "Opening cart");
    let cart = CartStore::initialize(Box::new(storage));

    match cli.command {
        Some(Commands::List) => {
            for line in list_lines(&cart) {
                println!("{line}");
            }
            Ok(())
        }
        _ => run_tui(cart, config.toast_ticks),
    }
}

/// Runs the interactive cart, restoring the terminal however it ends.
fn run_tui(cart: CartStore, toast_ticks: u8) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(cart, Arc::new(ClipboardManager::new()), toast_ticks);

    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}

fn print_config_path(paths: &AppPaths) -> Result<()> {
    let path = paths.config_file()?;
    if !path.exists() {
        AppConfig::default().save(paths)?;
    }
    println!("{}", path.display());
    Ok(())
}

/// One line per item for `picart list`.
fn list_lines(cart: &CartStore) -> Vec<String> {
    if cart.count() == 0 {
        return vec!["No items in your cart.".to_string()];
    }

    cart.items()
        .iter()
        .map(|item| {
            format!(
                "{} ⇄ {}  {}  #{}",
                item.item_name,
                format_compact_quantity(item.quantity),
                item.formatted_created_at,
                item.id
            )
        })
        .collect()
}

/// Sends tracing output to the log file; the terminal belongs to the TUI.
///
/// Logging stays off when the log file cannot be opened.
fn setup_tracing(paths: &AppPaths) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let Ok(log_path) = paths.log_file() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(path = ?log_path, "Tracing initialized");
    }
}

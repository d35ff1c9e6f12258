//! Ora CLI - browse the storefront catalogs and manage a local cart.
//!
//! Commands:
//! - `ora browse` - Filter, sort and page through a catalog
//! - `ora cart` - Manage the artifact cart
//! - `ora fav` - Toggle favorites, bookmarks and subscriptions
//! - `ora config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CartArgs, ConfigArgs, FavArgs};

/// Ora CLI - browse catalogs, keep a cart and favorites
#[derive(Parser)]
#[command(name = "ora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through a catalog
    Browse(BrowseArgs),

    /// Manage the artifact cart
    Cart(CartArgs),

    /// Toggle and list favorites, bookmarks or subscriptions
    Fav(FavArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Logs go to stderr so JSON output on stdout stays clean. `RUST_LOG`
/// overrides the level picked from `--verbose`.
fn initialize_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Fav(args) => commands::favorites::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

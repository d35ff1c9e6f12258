//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod favorites;

use clap::{Args, Subcommand, ValueEnum};

/// Catalog pages that can be browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    Artifacts,
    Courses,
    Blog,
    Library,
    Curriculum,
    Teachers,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Catalog to browse.
    #[arg(value_enum)]
    pub domain: Domain,

    /// Free-text search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Facet selection as key=value (repeatable).
    #[arg(short, long = "facet", value_name = "KEY=VALUE")]
    pub facets: Vec<String>,

    /// Lower price bound, in whole currency units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Upper price bound, in whole currency units.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Date window on dated catalogs: all, week, month, quarter, year.
    #[arg(long)]
    pub date: Option<String>,

    /// Sort key: popular, price_asc, price_desc, new, name, progress, date.
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Results per page.
    #[arg(long, default_value = "12")]
    pub per_page: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add one unit of an artifact.
    Add {
        /// Artifact id.
        id: String,
    },
    /// Increase the quantity of an artifact already in the cart.
    Inc {
        /// Artifact id.
        id: String,
        /// Amount to add.
        #[arg(default_value = "1")]
        by: u32,
    },
    /// Decrease the quantity; reaching zero removes the artifact.
    Dec {
        /// Artifact id.
        id: String,
        /// Amount to subtract.
        #[arg(default_value = "1")]
        by: u32,
    },
    /// Remove an artifact regardless of quantity.
    Remove {
        /// Artifact id.
        id: String,
    },
    /// Show cart contents and total.
    Show,
    /// Empty the cart.
    Clear,
}

/// Which persisted id set to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SetName {
    #[default]
    Favorites,
    Bookmarks,
    Subscriptions,
}

/// Arguments for the fav command.
#[derive(Args)]
pub struct FavArgs {
    /// Id set to use.
    #[arg(long, value_enum, default_value_t = SetName::Favorites)]
    pub set: SetName,

    #[command(subcommand)]
    pub command: FavCommand,
}

#[derive(Subcommand)]
pub enum FavCommand {
    /// Add the id if absent, remove it if present.
    Toggle {
        /// Item id.
        id: String,
    },
    /// List members.
    List {
        /// Only show one kind: course, artifact, blog, article, curriculum, teacher.
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Remove every member.
    Clear,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

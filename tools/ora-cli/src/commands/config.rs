//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use ora_commerce::config::{generate_default_config, StorefrontConfig};

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[storage]");
    ctx.output.kv("cart_key", &config.storage.cart_key);
    ctx.output.kv("favorites_key", &config.storage.favorites_key);
    ctx.output.kv("bookmarks_key", &config.storage.bookmarks_key);
    ctx.output.kv("subscriptions_key", &config.storage.subscriptions_key);
    ctx.output.kv("data_dir", &ctx.data_dir().display().to_string());

    ctx.output.info("[pricing]");
    ctx.output.kv("currency", &config.pricing.currency);
    let [min, max] = config.pricing.artifact_price_bounds;
    ctx.output.kv("artifact_price_bounds", &format!("{}..{}", min, max));
    let [min, max] = config.pricing.course_price_bounds;
    ctx.output.kv("course_price_bounds", &format!("{}..{}", min, max));

    let sources = catalog_sources(config);
    if !sources.is_empty() {
        ctx.output.info("[catalog]");
        for (name, path) in sources {
            ctx.output.kv(name, &path.display().to_string());
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.validate() {
        errors.push(e.to_string());
    }

    let storage = &ctx.config.storage;
    let keys = [
        &storage.cart_key,
        &storage.favorites_key,
        &storage.bookmarks_key,
        &storage.subscriptions_key,
    ];
    if keys.iter().any(|k| k.is_empty()) {
        errors.push("storage keys must not be empty".to_string());
    }
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].contains(key) {
            errors.push(format!("storage key '{}' is used twice", key));
        }
    }

    for (name, path) in catalog_sources(&ctx.config) {
        if !ctx.cwd.join(&path).exists() {
            warnings.push(format!("catalog.{} file not found: {}", name, path.display()));
        }
    }
    if errors.is_empty() && warnings.is_empty() {
        if let Err(e) = ctx.storefront() {
            errors.push(format!("{:#}", e));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn catalog_sources(config: &StorefrontConfig) -> Vec<(&'static str, PathBuf)> {
    let sources = &config.catalog;
    [
        ("artifacts", &sources.artifacts),
        ("courses", &sources.courses),
        ("blog", &sources.blog),
        ("library", &sources.library),
        ("curriculum", &sources.curriculum),
        ("teachers", &sources.teachers),
    ]
    .into_iter()
    .filter_map(|(name, path)| path.clone().map(|p| (name, p)))
    .collect()
}

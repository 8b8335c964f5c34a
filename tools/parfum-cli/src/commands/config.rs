//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use parfum_storefront::{LogFormat, StorefrontConfig};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
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

    ctx.output.info("[carousel]");
    ctx.output
        .kv("interval_ms", &ctx.config.carousel.interval_ms.to_string());

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(shipped catalog)"),
    }
    ctx.output.kv("products", &ctx.catalog.len().to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("filter", &ctx.config.logging.filter);
    let format = match ctx.config.logging.format {
        LogFormat::Human => "human",
        LogFormat::Json => "json",
    };
    ctx.output.kv("format", format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let content = StorefrontConfig::default().to_toml_string()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ctx.output
        .success(&format!("Wrote default config to {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    // Loading already parsed and validated the file; re-check for the report.
    ctx.config.validate()?;

    match &ctx.config_path {
        Some(path) => ctx
            .output
            .success(&format!("{} is valid", path.display())),
        None => ctx.output.info("No config file found; defaults are valid"),
    }
    Ok(())
}

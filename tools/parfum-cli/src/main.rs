//! Parfum CLI - Command line tool for the Parfum storefront.
//!
//! Commands:
//! - `parfum products` - List, show and search catalog products
//! - `parfum render` - Render the home or a product page as HTML
//! - `parfum carousel` - Run the hero carousel timer
//! - `parfum config` - Manage configuration

mod commands;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CarouselArgs, ConfigArgs, ProductsArgs, RenderArgs};

/// Parfum CLI - Browse and render the fragrance storefront
#[derive(Parser)]
#[command(name = "parfum")]
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
    /// Browse catalog products
    Products(ProductsArgs),

    /// Render a storefront page as HTML
    Render(RenderArgs),

    /// Run the hero carousel for a number of ticks
    Carousel(CarouselArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config, then start logging before the catalog is read
    let config_path = cli.config.as_deref();
    let (config, config_path) = match context::Context::load_config(config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&config.logging, cli.verbose);

    let ctx = match context::Context::new(config, config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Carousel(args) => commands::carousel::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

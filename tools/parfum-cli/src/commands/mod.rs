//! CLI command implementations.

pub mod carousel;
pub mod config;
pub mod products;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: Option<ProductsCommand>,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products in display order.
    List {
        /// Only products in this category.
        #[arg(long)]
        category: Option<String>,

        /// Only products marked as new.
        #[arg(long)]
        new: bool,
    },
    /// Show one product.
    Show {
        /// Product id, as it appears in `/product/:id`.
        id: String,
    },
    /// Search names and descriptions.
    Search {
        /// Text to look for (case-insensitive).
        term: String,
    },
    /// List category labels.
    Categories,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,
}

#[derive(Subcommand)]
pub enum RenderCommand {
    /// Render the home page.
    Home {
        /// Active hero slide.
        #[arg(short, long)]
        slide: Option<usize>,

        /// Product id to show in the quick view overlay.
        #[arg(short, long)]
        quick_view: Option<String>,
    },
    /// Render a product detail page.
    Product {
        /// Product id, or a full `/product/:id` path.
        id: String,
    },
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {
    /// Number of timer ticks to wait for.
    #[arg(short, long, default_value = "3")]
    pub ticks: u32,

    /// Override the configured interval in milliseconds.
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Slide to select right after mounting.
    #[arg(short, long)]
    pub select: Option<usize>,
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
    /// Write a config file with default values.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

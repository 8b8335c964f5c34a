//! Catalog browsing commands.

use anyhow::{bail, Result};
use parfum_commerce::catalog::{Catalog, Product};
use parfum_storefront::{resolve_product, DetailPage};

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::new_badge;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ProductsCommand::List { category, new }) => {
            list_products(category.as_deref(), new, ctx)
        }
        None => list_products(None, false, ctx),
        Some(ProductsCommand::Show { id }) => show_product(&id, ctx),
        Some(ProductsCommand::Search { term }) => search_products(&term, ctx),
        Some(ProductsCommand::Categories) => list_categories(ctx),
    }
}

fn list_products(category: Option<&str>, new_only: bool, ctx: &Context) -> Result<()> {
    let products = select_products(&ctx.catalog, category, new_only);
    print_products("Products", &products, ctx);
    Ok(())
}

fn select_products<'c>(catalog: &'c Catalog, category: Option<&str>, new_only: bool) -> Vec<&'c Product> {
    match (category, new_only) {
        (None, false) => catalog.iter().collect(),
        (None, true) => catalog.new_arrivals(),
        (Some(category), false) => catalog.by_category(category),
        (Some(category), true) => {
            let mut products = catalog.by_category(category);
            products.retain(|p| p.is_new);
            products
        }
    }
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let product = match resolve_product(&ctx.catalog, id) {
        DetailPage::Found(product) => product,
        DetailPage::NotFound { requested } => bail!("Product not found: {}", requested),
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("category", &product.category);
    ctx.output.kv("price", &product.price);
    ctx.output.kv("size", &product.size);
    if product.is_new {
        ctx.output.kv("badge", &new_badge(product));
    }
    ctx.output.kv("description", &product.description);
    for (label, value) in product.notes.labelled() {
        ctx.output.kv(&format!("{} notes", label.to_lowercase()), value);
    }
    ctx.output.kv("image", &product.image);

    Ok(())
}

fn search_products(term: &str, ctx: &Context) -> Result<()> {
    let products = ctx.catalog.search(term);
    print_products(&format!("Results for '{}'", term), &products, ctx);
    Ok(())
}

fn list_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in categories {
        let count = ctx.catalog.by_category(category).len();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }
    Ok(())
}

fn print_products(title: &str, products: &[&Product], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header(title);
    if products.is_empty() {
        ctx.output.info("No products found.");
        return;
    }

    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", ""], &[4, 24, 20, 10, 4]);
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &product.category,
                &product.price,
                &new_badge(product),
            ],
            &[4, 24, 20, 10, 4],
        );
    }
}

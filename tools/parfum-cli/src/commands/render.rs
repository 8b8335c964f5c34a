//! Page rendering commands.

use anyhow::{bail, Context as _, Result};
use parfum_commerce::catalog::Catalog;
use parfum_commerce::ids::ProductId;
use parfum_commerce::promo::shipped_slides;
use parfum_commerce::selection::{Carousel, QuickView};
use parfum_storefront::{resolve_path, resolve_product, DetailPage};
use parfum_storefront::sections::{render_home, render_product_details};

use super::{RenderArgs, RenderCommand};
use crate::context::Context;

/// Suggestions shown under a rendered product.
const RELATED_LIMIT: usize = 3;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        RenderCommand::Home { slide, quick_view } => {
            render_home_page(slide, quick_view.as_deref(), ctx)
        }
        RenderCommand::Product { id } => render_product_page(&id, ctx),
    }
}

fn render_home_page(slide: Option<usize>, quick_view_id: Option<&str>, ctx: &Context) -> Result<()> {
    let slides = shipped_slides();
    let mut carousel = Carousel::new(slides.len())?;
    if let Some(index) = slide {
        carousel
            .select(index)
            .with_context(|| format!("Cannot show slide {}", index))?;
    }

    let mut quick_view = QuickView::default();
    if let Some(raw) = quick_view_id {
        let id = ProductId::parse(raw)
            .with_context(|| format!("Invalid product id: {}", raw))?;
        quick_view
            .open_by_id(&ctx.catalog, id)
            .context("Cannot open quick view")?;
    }

    ctx.output
        .raw(&render_home(slides, &carousel, &ctx.catalog, &quick_view));
    Ok(())
}

fn render_product_page(target: &str, ctx: &Context) -> Result<()> {
    let page = resolve_target(&ctx.catalog, target)?;
    if !page.is_found() {
        ctx.output.warn(&format!("No product at '{}'; rendering fallback", target));
    }

    let related = page
        .product()
        .map(|p| ctx.catalog.related(p.id, RELATED_LIMIT))
        .unwrap_or_default();

    ctx.output.raw(&render_product_details(&page, &related));
    Ok(())
}

/// Accept either a bare `:id` or a full `/product/:id` request path.
fn resolve_target<'c>(catalog: &'c Catalog, target: &str) -> Result<DetailPage<'c>> {
    if !target.starts_with('/') {
        return Ok(resolve_product(catalog, target));
    }
    match resolve_path(catalog, target) {
        Some(page) => Ok(page),
        None => bail!("Not a product route: {}", target),
    }
}

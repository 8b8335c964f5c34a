//! Carousel timer command.

use std::time::Duration;

use anyhow::{bail, Result};
use parfum_commerce::promo::{shipped_slides, Slide};
use parfum_commerce::selection::Carousel;
use parfum_storefront::MountedCarousel;
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;

use super::CarouselArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct TickRecord {
    tick: u64,
    index: usize,
    title: String,
}

#[derive(Debug, Serialize)]
struct CarouselReport {
    ticks: Vec<TickRecord>,
    state: Carousel,
}

/// Run the carousel command.
pub async fn run(args: CarouselArgs, ctx: &Context) -> Result<()> {
    let interval = match args.interval_ms {
        Some(0) => bail!("--interval-ms must be greater than zero"),
        Some(ms) => Duration::from_millis(ms),
        None => ctx.config.carousel.interval(),
    };

    let slides = shipped_slides();
    let carousel = MountedCarousel::mount(slides.len(), interval)?;
    let mut ticks = carousel.subscribe();
    ctx.output.debug(&format!(
        "Mounted carousel with {} slides every {}ms",
        slides.len(),
        interval.as_millis()
    ));

    if let Some(index) = args.select {
        if let Err(e) = carousel.select(index) {
            ctx.output.warn(&format!("{}", e));
        }
    }

    ctx.output.header("Carousel");
    let mut records = vec![record(0, carousel.index(), slides)];
    print_record(&records[0], ctx);

    while records.len() <= args.ticks as usize {
        match ticks.recv().await {
            Ok(tick) => {
                let current = record(tick.tick, tick.index, slides);
                print_record(&current, ctx);
                records.push(current);
            }
            Err(RecvError::Lagged(missed)) => {
                ctx.output.warn(&format!("Missed {} ticks", missed));
            }
            Err(RecvError::Closed) => bail!("Carousel timer stopped early"),
        }
    }

    let state = carousel.observer().snapshot();
    carousel.unmount().await;

    if ctx.output.is_json() {
        ctx.output.json(&CarouselReport {
            ticks: records,
            state,
        });
    } else {
        ctx.output.success("Carousel unmounted");
    }
    Ok(())
}

fn record(tick: u64, index: usize, slides: &[Slide]) -> TickRecord {
    TickRecord {
        tick,
        index,
        title: slides
            .get(index)
            .map(|s| s.title.clone())
            .unwrap_or_default(),
    }
}

fn print_record(record: &TickRecord, ctx: &Context) {
    ctx.output.kv(
        &format!("tick {}", record.tick),
        &format!("slide {} - {}", record.index, record.title),
    );
}

//! Hero carousel bound to a recurring timer.
//!
//! Mounting spawns one task that advances the carousel on a fixed interval.
//! The task is owned by the `MountedCarousel`: `unmount` stops it and waits
//! for it, and dropping the handle without unmounting aborts it. Either way
//! no tick lands after teardown.
//!
//! Every timer advance is also published as a [`CarouselTick`], so callers
//! can follow the carousel tick by tick instead of sampling the clock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use parfum_commerce::selection::Carousel;
use tokio::runtime::Handle;
use serde::Serialize;
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::error::{StorefrontError, StorefrontResult};

/// Ticks buffered per subscriber before it starts lagging.
const TICK_CAPACITY: usize = 16;

/// One timer advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselTick {
    /// Ticks since mounting, starting at 1.
    pub tick: u64,
    /// Slide index after this tick.
    pub index: usize,
}

/// Read-only view of a carousel's state.
///
/// Stays valid after the carousel is unmounted; the index simply stops
/// changing.
#[derive(Debug, Clone)]
pub struct CarouselObserver {
    state: Arc<Mutex<Carousel>>,
}

impl CarouselObserver {
    /// The active slide index.
    pub fn index(&self) -> usize {
        lock(&self.state).index()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Carousel {
        *lock(&self.state)
    }
}

/// A carousel with its auto-advance timer running.
///
/// Timer ticks and manual selections go through the same lock, so they
/// apply one at a time in arrival order.
#[derive(Debug)]
pub struct MountedCarousel {
    state: Arc<Mutex<Carousel>>,
    interval: Duration,
    ticks: broadcast::Sender<CarouselTick>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl MountedCarousel {
    /// Start a carousel over `slide_count` slides advancing every `interval`.
    ///
    /// The first advance happens one full interval after mounting. Must be
    /// called from within a Tokio runtime.
    pub fn mount(slide_count: usize, interval: Duration) -> StorefrontResult<Self> {
        let carousel = Carousel::new(slide_count)?;
        if interval.is_zero() {
            return Err(StorefrontError::InvalidConfig(
                "carousel interval must be greater than zero".to_string(),
            ));
        }
        let runtime = Handle::try_current().map_err(|_| StorefrontError::RuntimeUnavailable)?;

        let state = Arc::new(Mutex::new(carousel));
        let (ticks, _) = broadcast::channel(TICK_CAPACITY);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = runtime.spawn(run_timer(
            Arc::clone(&state),
            interval,
            ticks.clone(),
            shutdown_rx,
        ));

        info!(
            slides = slide_count,
            interval_ms = interval.as_millis() as u64,
            "Carousel mounted"
        );

        Ok(Self {
            state,
            interval,
            ticks,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// Jump to the slide at `index`. The timer keeps its schedule.
    pub fn select(&self, index: usize) -> StorefrontResult<()> {
        lock(&self.state).select(index)?;
        debug!(index, "Carousel slide selected");
        Ok(())
    }

    /// The active slide index.
    pub fn index(&self) -> usize {
        lock(&self.state).index()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        lock(&self.state).len()
    }

    /// Always false; a mounted carousel has at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// A read-only handle that outlives this carousel.
    pub fn observer(&self) -> CarouselObserver {
        CarouselObserver {
            state: Arc::clone(&self.state),
        }
    }

    /// Receive every timer advance from now on.
    ///
    /// The receiver reports `Closed` once the carousel is unmounted or
    /// dropped. Manual selections are not published.
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselTick> {
        self.ticks.subscribe()
    }

    /// Stop the timer and wait for it to finish.
    pub async fn unmount(mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "Carousel timer task failed");
                }
            }
        }

        info!(index = self.index(), "Carousel unmounted");
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Carousel timer aborted on drop");
        }
    }
}

async fn run_timer(
    state: Arc<Mutex<Carousel>>,
    period: Duration,
    ticks: broadcast::Sender<CarouselTick>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut tick = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let index = lock(&state).tick();
                tick += 1;
                trace!(tick, index, "Carousel advanced");
                // No subscribers is fine.
                let _ = ticks.send(CarouselTick { tick, index });
            }

            // Fires on an explicit unmount and when the handle is dropped.
            _ = &mut shutdown_rx => {
                debug!("Carousel timer stopping");
                break;
            }
        }
    }
}

fn lock(state: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

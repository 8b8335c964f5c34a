//! Ephemeral per-session selection state.
//!
//! Holds the carousel index and the quick-view overlay state machines. Both
//! live only as long as the view that owns them.

mod carousel;
mod quick_view;

pub use carousel::Carousel;
pub use quick_view::{CloseReason, QuickView};

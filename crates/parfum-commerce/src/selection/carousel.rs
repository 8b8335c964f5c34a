//! Carousel state machine.

use serde::Serialize;
use tracing::{trace, warn};

use crate::CommerceError;

/// Index of the active slide in a fixed-length carousel.
///
/// The index is always in `0..len`. It advances by one (wrapping) on every
/// timer tick, or jumps straight to a selected indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Create a carousel over `len` slides, starting at the first one.
    pub fn new(len: usize) -> Result<Self, CommerceError> {
        if len == 0 {
            return Err(CommerceError::EmptyCarousel);
        }
        Ok(Self { index: 0, len })
    }

    /// Advance to the next slide, wrapping back to the first.
    pub fn tick(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        trace!(index = self.index, "Carousel ticked");
        self.index
    }

    /// Jump to a specific slide.
    ///
    /// Out-of-range indices are rejected and the current slide is kept.
    pub fn select(&mut self, index: usize) -> Result<(), CommerceError> {
        if index >= self.len {
            warn!(index, len = self.len, "Rejected carousel selection");
            return Err(CommerceError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// The active slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a carousel has at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the indicator at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.tick();
        assert_eq!(
            serde_json::to_value(carousel).unwrap(),
            serde_json::json!({ "index": 1, "len": 3 })
        );
    }

    #[test]
    fn test_empty_carousel_rejected() {
        assert_eq!(Carousel::new(0), Err(CommerceError::EmptyCarousel));
    }

    #[test]
    fn test_ticks_wrap() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.tick(), 1);
        assert_eq!(carousel.tick(), 2);
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn test_k_ticks_land_on_k_mod_n() {
        for len in 1..=5 {
            let mut carousel = Carousel::new(len).unwrap();
            for k in 1..=20 {
                carousel.tick();
                assert_eq!(carousel.index(), k % len);
                assert!(carousel.index() < carousel.len());
            }
        }
    }

    #[test]
    fn test_select_then_tick() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.tick();
        carousel.select(2).unwrap();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.tick(), 0);

        carousel.select(0).unwrap();
        assert_eq!(carousel.tick(), 1);
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.tick();

        assert_eq!(
            carousel.select(3),
            Err(CommerceError::SlideOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.tick(), 0);
    }
}

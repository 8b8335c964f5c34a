//! Promotional slides for the home page hero.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::ids::SlideId;

/// One entry in the promotional carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub subtitle: String,
    /// Background image URL.
    pub image: String,
    /// Call-to-action button label.
    pub cta: String,
}

impl Slide {
    fn new(id: u32, title: &str, subtitle: &str, image: &str, cta: &str) -> Option<Self> {
        Some(Self {
            id: SlideId::new(i64::from(id))?,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: image.to_string(),
            cta: cta.to_string(),
        })
    }
}

/// The slides the home page rotates through, in display order.
pub fn shipped_slides() -> &'static [Slide] {
    static SLIDES: OnceLock<Vec<Slide>> = OnceLock::new();
    SLIDES.get_or_init(|| {
        [
            Slide::new(
                1,
                "Every perfume set is a wish",
                "each fragrance a note of happiness just for you",
                "https://images.unsplash.com/photo-1541643600914-78b084683601?q=80&w=2000&auto=format&fit=crop",
                "Explore Collection",
            ),
            Slide::new(
                2,
                "Scents for...? 1QAR",
                "Yes, that's right!",
                "https://images.unsplash.com/photo-1594035910387-fea477942654?q=80&w=2000&auto=format&fit=crop",
                "Shop Now",
            ),
            Slide::new(
                3,
                "Discover fragrance in its purest form",
                "Alcohol free allure",
                "https://images.unsplash.com/photo-1615634260167-c8cdede054de?q=80&w=2000&auto=format&fit=crop",
                "Subscribe Now",
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    })
}

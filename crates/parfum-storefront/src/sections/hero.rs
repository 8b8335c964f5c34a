//! Hero carousel section.

use parfum_commerce::promo::Slide;
use parfum_commerce::selection::Carousel;

use super::html_escape;

/// Render the hero showing the carousel's active slide and its indicators.
pub fn render_hero(slides: &[Slide], carousel: &Carousel) -> String {
    let Some(slide) = slides.get(carousel.index()) else {
        return render_hero_empty();
    };

    let indicators: String = (0..slides.len())
        .map(|i| {
            let active = if carousel.is_active(i) { " active" } else { "" };
            format!(
                r#"<button class="hero-indicator{active}" data-slide="{i}" aria-label="Slide {n}"></button>"#,
                active = active,
                i = i,
                n = i + 1
            )
        })
        .collect();

    format!(
        r#"<section class="hero" data-section="hero" data-slide="{index}" style="background-image: url('{image}')">
    <div class="hero-content">
        <h2 class="hero-title">{title}</h2>
        <p class="hero-subtitle">{subtitle}</p>
        <a href="/" class="hero-cta">{cta}</a>
    </div>
    <div class="hero-indicators">{indicators}</div>
</section>"#,
        index = carousel.index(),
        image = html_escape(&slide.image),
        title = html_escape(&slide.title),
        subtitle = html_escape(&slide.subtitle),
        cta = html_escape(&slide.cta),
        indicators = indicators
    )
}

fn render_hero_empty() -> String {
    r#"<section class="hero hero--empty" data-section="hero"></section>"#.to_string()
}

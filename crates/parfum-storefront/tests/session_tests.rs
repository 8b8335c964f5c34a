//! Browsing session behavior across the carousel, quick view and routing.

use std::time::Duration;

use parfum_storefront::parfum_commerce::prelude::*;
use parfum_storefront::{BrowsingSession, CarouselConfig, DetailPage, StorefrontError};

fn config() -> CarouselConfig {
    CarouselConfig { interval_ms: 5000 }
}

fn id(raw: i64) -> ProductId {
    ProductId::new(raw).unwrap()
}

#[tokio::test(start_paused = true)]
async fn carousel_advances_while_mounted() {
    let session = BrowsingSession::start(Catalog::shipped(), shipped_slides(), &config()).unwrap();
    assert_eq!(session.active_slide(), 0);

    tokio::time::sleep(Duration::from_millis(15_001)).await;
    assert_eq!(session.active_slide(), 0);

    session.select_slide(2).unwrap();
    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert_eq!(session.active_slide(), 0);

    let observer = session.carousel().observer();
    session.teardown().await;

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(observer.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn sessions_do_not_share_selection() {
    let catalog = Catalog::shipped();
    let mut first = BrowsingSession::start(catalog, shipped_slides(), &config()).unwrap();
    let second = BrowsingSession::start(catalog, shipped_slides(), &config()).unwrap();

    first.select_slide(1).unwrap();
    first.open_quick_view(id(2)).unwrap();

    assert_eq!(second.active_slide(), 0);
    assert!(!second.quick_view().is_visible());

    first.teardown().await;
    second.teardown().await;
}

#[tokio::test(start_paused = true)]
async fn quick_view_flow() {
    let mut session =
        BrowsingSession::start(Catalog::shipped(), shipped_slides(), &config()).unwrap();

    let opened = session.open_quick_view(id(1)).unwrap();
    assert_eq!(opened.name, "Royal Oud Intense");
    assert!(session.render_home().contains(r#"data-section="quick-view""#));

    session.close_quick_view(CloseReason::Backdrop);
    assert!(!session.quick_view().is_visible());
    assert!(!session.render_home().contains(r#"data-section="quick-view""#));

    session.open_quick_view(id(4)).unwrap();
    assert_eq!(session.view_details().as_deref(), Some("/product/4"));
    assert_eq!(*session.quick_view(), QuickView::Closed);
    assert_eq!(session.view_details(), None);

    let err = session.open_quick_view(id(9)).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::ProductNotFound(_))
    ));
    assert!(!session.quick_view().is_visible());

    let opened = session.open_quick_view(id(2)).unwrap();
    session.open_quick_view(id(9)).unwrap_err();
    assert_eq!(session.quick_view().product(), Some(opened));

    session.teardown().await;
}

#[tokio::test(start_paused = true)]
async fn product_pages_degrade_to_not_found() {
    let session = BrowsingSession::start(Catalog::shipped(), shipped_slides(), &config()).unwrap();

    assert!(matches!(session.product_page("1"), DetailPage::Found(p) if p.name == "Royal Oud Intense"));
    for param in ["0", "-1", "999", "abc"] {
        assert!(!session.product_page(param).is_found());
        assert!(session.render_product(param).contains("Product not found"));
    }
    assert!(session.render_product("2").contains("You May Also Like"));

    session.teardown().await;
}

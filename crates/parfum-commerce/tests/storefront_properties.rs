//! Behavior the storefront pages rely on, exercised through the public API.

use parfum_commerce::prelude::*;

#[test]
fn shipped_lookups_resolve_by_id() {
    let catalog = Catalog::shipped();

    let first = ProductId::parse("1").and_then(|id| catalog.find_by_id(id));
    let last = ProductId::parse("4").and_then(|id| catalog.find_by_id(id));

    assert_eq!(first.map(|p| p.name.as_str()), Some("Royal Oud Intense"));
    assert_eq!(last.map(|p| p.name.as_str()), Some("Crystal Noir Edition"));
}

#[test]
fn unknown_and_malformed_ids_are_not_found() {
    let catalog = Catalog::shipped();

    for param in ["0", "-1", "999", "abc", "2.5", "", "NaN", "99999999999"] {
        let found = ProductId::parse(param).and_then(|id| catalog.find_by_id(id));
        assert!(found.is_none(), "{param:?} should not resolve");
    }
}

#[test]
fn list_all_twice_is_identical() {
    let catalog = Catalog::shipped();
    let a: Vec<u32> = catalog.list_all().iter().map(|p| p.id.get()).collect();
    let b: Vec<u32> = catalog.list_all().iter().map(|p| p.id.get()).collect();

    assert_eq!(a, vec![1, 2, 3, 4]);
    assert_eq!(a, b);
}

#[test]
fn carousel_over_shipped_slides_cycles_back() {
    let mut carousel = Carousel::new(shipped_slides().len()).unwrap();

    for _ in 0..3 {
        carousel.tick();
    }
    assert_eq!(carousel.index(), 0);

    carousel.select(1).unwrap();
    assert_eq!(carousel.tick(), 2);
}

#[test]
fn quick_view_never_mixes_selections() {
    let catalog = Catalog::shipped();
    let mut quick_view = QuickView::default();
    let p = ProductId::new(2).unwrap();
    let q = ProductId::new(4).unwrap();

    quick_view.open_by_id(catalog, p).unwrap();
    quick_view.close(CloseReason::CloseButton);
    quick_view.open_by_id(catalog, q).unwrap();

    assert!(quick_view.is_visible());
    assert_eq!(quick_view.product().map(|p| p.id), Some(q));
}

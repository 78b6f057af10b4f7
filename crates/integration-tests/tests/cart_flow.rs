//! Shopper session scenarios driven through the library.
//!
//! These run without a server: a `ShopSession` with a `NotificationQueue`
//! is exactly what the HTTP layer holds behind its mutex.

use std::sync::Arc;

use elegance_core::Price;
use elegance_storefront::catalog::Catalog;
use elegance_storefront::checkout::{EnquiryForm, OrderSummary, SHIPPING_FEE, submit_enquiry};
use elegance_storefront::notify::{NotificationLevel, NotificationQueue};
use elegance_storefront::session::ShopSession;

fn session() -> (ShopSession, NotificationQueue, Catalog) {
    let queue = NotificationQueue::new();
    let session = ShopSession::new(Arc::new(queue.clone()));
    let catalog = Catalog::builtin().expect("built-in catalog is valid");
    (session, queue, catalog)
}

fn contact_form() -> EnquiryForm {
    EnquiryForm {
        name: "Meera Iyer".to_string(),
        email: "meera@example.in".to_string(),
        phone: "98450 12345".to_string(),
        address: "4 Residency Road".to_string(),
        ..EnquiryForm::default()
    }
}

// ============================================================================
// Cart
// ============================================================================

#[test]
fn test_repeated_add_merges_then_remove_empties() {
    let (mut session, queue, catalog) = session();
    let jacket = catalog.get("k-004").expect("k-004 exists");

    session.cart_mut().add_to_cart(jacket, 1, "4-5Y", "Red");
    session.cart_mut().add_to_cart(jacket, 2, "4-5Y", "Red");

    let cart = session.cart();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), jacket.price.times(3));

    let notes = queue.drain();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.title == "Added to Cart"));

    session.cart_mut().remove_from_cart("k-004", "4-5Y", "Red");
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().total_price(), Price::ZERO);
}

#[test]
fn test_lines_are_keyed_by_size_and_color() {
    let (mut session, _queue, catalog) = session();
    let tee = catalog.get("m-005").expect("m-005 exists");

    session.cart_mut().add_to_cart(tee, 1, "M", "White");
    session.cart_mut().add_to_cart(tee, 1, "L", "White");
    session.cart_mut().add_to_cart(tee, 1, "M", "Black");

    assert_eq!(session.cart().items().len(), 3);
    assert_eq!(session.cart().total_items(), 3);
}

#[test]
fn test_update_quantity_below_one_removes_line() {
    let (mut session, _queue, catalog) = session();
    let tee = catalog.get("m-005").expect("m-005 exists");

    session.cart_mut().add_to_cart(tee, 2, "M", "White");
    session.cart_mut().add_to_cart(tee, 1, "L", "Black");

    session.cart_mut().update_quantity("m-005", "M", "White", 5);
    assert_eq!(session.cart().total_items(), 6);

    session.cart_mut().update_quantity("m-005", "M", "White", 0);
    assert_eq!(session.cart().items().len(), 1);

    session.cart_mut().update_quantity("m-005", "L", "Black", -1);
    assert!(session.cart().is_empty());
}

#[test]
fn test_totals_track_every_mutation() {
    let (mut session, _queue, catalog) = session();
    let dress = catalog.get("w-001").expect("w-001 exists");
    let tee = catalog.get("k-001").expect("k-001 exists");

    session.cart_mut().add_to_cart(dress, 1, "S", "Emerald");
    session.cart_mut().add_to_cart(tee, 4, "2-3Y", "Yellow");
    session.cart_mut().update_quantity("k-001", "2-3Y", "Yellow", 2);

    let expected: Price = session
        .cart()
        .items()
        .iter()
        .map(|item| item.product.price.times(item.quantity))
        .sum();
    assert_eq!(session.cart().total_price(), expected);
    assert_eq!(
        session.cart().total_price(),
        dress.price + tee.price.times(2)
    );
    assert_eq!(session.cart().total_items(), 3);
}

// ============================================================================
// Wishlist
// ============================================================================

#[test]
fn test_wishlist_add_twice_then_remove() {
    let (mut session, _queue, catalog) = session();
    let coord = catalog.get("w-002").expect("w-002 exists");

    session.wishlist_mut().add_to_wishlist(coord);
    session.wishlist_mut().add_to_wishlist(coord);
    assert_eq!(session.wishlist().total_wishlist_items(), 1);
    assert!(session.wishlist().is_in_wishlist("w-002"));
    assert!(!session.wishlist().is_in_wishlist("w-00"));

    session.wishlist_mut().remove_from_wishlist("w-002");
    assert!(session.wishlist().is_empty());
}

#[test]
fn test_move_to_cart_uses_default_options() {
    let (mut session, queue, catalog) = session();
    let coord = catalog.get("w-002").expect("w-002 exists");

    session.wishlist_mut().add_to_wishlist(coord);
    assert!(session.move_to_cart("w-002"));

    assert!(session.wishlist().is_empty());
    let line = session.cart().line("w-002", "S", "Oatmeal").expect("line added");
    assert_eq!(line.quantity, 1);
    assert_eq!(queue.drain().len(), 1);

    assert!(!session.move_to_cart("w-002"));
}

// ============================================================================
// Enquiry
// ============================================================================

#[test]
fn test_enquiry_below_free_shipping_threshold() {
    let (mut session, queue, catalog) = session();
    let tee = catalog.get("k-001").expect("k-001 exists");
    session.cart_mut().add_to_cart(tee, 1, "6-7Y", "Blue");
    let _ = queue.drain();

    let enquiry = submit_enquiry(&mut session, &contact_form()).expect("enquiry accepted");

    assert_eq!(enquiry.summary.shipping, SHIPPING_FEE);
    assert_eq!(enquiry.summary, OrderSummary::for_subtotal(tee.price));
    assert_eq!(enquiry.contact.email.as_str(), "meera@example.in");
    assert!(session.cart().is_empty());

    let notes = queue.drain();
    assert_eq!(notes.len(), 1);
    assert!(notes.iter().all(|n| n.level == NotificationLevel::Info));
}

#[test]
fn test_rejected_enquiry_keeps_cart() {
    let (mut session, queue, catalog) = session();
    let blazer = catalog.get("m-002").expect("m-002 exists");
    session.cart_mut().add_to_cart(blazer, 1, "L", "Charcoal");
    let _ = queue.drain();

    let form = EnquiryForm {
        address: String::new(),
        ..contact_form()
    };
    assert!(submit_enquiry(&mut session, &form).is_err());
    assert_eq!(session.cart().total_items(), 1);
    assert_eq!(
        queue.drain().first().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

//! Integration tests for checkout, order history, and reviews in a full
//! session.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use stylehub_core::{
    Email, NewReview, OrderId, OrderStatus, Price, ProductId, Rating, ReviewUpdate,
};
use stylehub_integration_tests::{
    CATALOG_JSON, ORDERS_JSON, REVIEWS_JSON, file_config, shipping_address,
};
use stylehub_storefront::AppState;
use stylehub_storefront::config::{ConfigError, StorefrontConfig};
use stylehub_storefront::error::AppError;
use stylehub_storefront::orders::{OrderError, OrderGateway, OrderQuery};
use stylehub_storefront::reviews::{ReviewError, ReviewGateway};

fn email(s: &str) -> Email {
    Email::parse(s).unwrap()
}

fn seeded_config(dir: &std::path::Path) -> StorefrontConfig {
    let write = |name: &str, body: &str| {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        Some(path)
    };
    let mut config = file_config(&dir.join("data"));
    config.catalog_path = write("products.json", CATALOG_JSON);
    config.orders_path = write("orders.json", ORDERS_JSON);
    config.reviews_path = write("reviews.json", REVIEWS_JSON);
    config
}

// =============================================================================
// Checkout Tests
// =============================================================================

#[tokio::test]
async fn test_checkout_places_order_and_empties_cart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded_config(dir.path());
    let ada = email("ada@example.com");

    let mut state = AppState::from_config(&config).await.unwrap();
    let linen = ProductId::from(1);
    state
        .add_product_to_cart(&linen, Some("M".to_string()), None)
        .await
        .unwrap();
    state
        .add_product_to_cart(&ProductId::from(3), None, None)
        .await
        .unwrap();

    // 39.99 + 60.00 stays under the free-shipping threshold
    let summary = state.cart().checkout_summary();
    assert_eq!(summary.subtotal, "99.99".parse().unwrap());
    assert_eq!(summary.shipping, "8.99".parse().unwrap());
    assert_eq!(summary.tax, "9.00".parse().unwrap());
    assert_eq!(summary.total, "117.98".parse().unwrap());

    let order = state
        .place_order(ada.clone(), shipping_address("ada@example.com"), "Credit Card")
        .await
        .unwrap();
    assert_eq!(order.id, OrderId::new(3));
    assert_eq!(order.totals(), summary);
    assert_eq!(order.status, OrderStatus::Processing);
    assert!(state.cart().is_empty());

    let history = state.orders().user_orders(&ada).await.unwrap();
    let ids: Vec<u32> = history.iter().map(|o| o.id.as_u32()).collect();
    assert_eq!(ids, [3, 1]);

    // the emptied cart is what a restart sees
    let restarted = AppState::from_config(&config).await.unwrap();
    assert!(restarted.cart().is_empty());
}

#[tokio::test]
async fn test_free_shipping_over_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::from_config(&seeded_config(dir.path())).await.unwrap();
    state.add_product_to_cart(&ProductId::from(3), None, None).await.unwrap();
    state.add_product_to_cart(&ProductId::from(3), None, None).await.unwrap();

    let summary = state.cart().checkout_summary();
    assert_eq!(summary.shipping, Price::ZERO);
    assert_eq!(summary.tax, "10.80".parse().unwrap());
    assert_eq!(summary.total, "130.80".parse().unwrap());
}

#[tokio::test]
async fn test_incomplete_address_keeps_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::from_config(&seeded_config(dir.path())).await.unwrap();
    state.add_product_to_cart(&ProductId::from(2), None, None).await.unwrap();

    let mut address = shipping_address("ada@example.com");
    address.city = String::new();
    let err = state
        .place_order(email("ada@example.com"), address, "Credit Card")
        .await
        .unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(state.cart().item_count(), 1);
}

// =============================================================================
// Order History Tests
// =============================================================================

#[tokio::test]
async fn test_order_history_search_and_ownership() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_config(&seeded_config(dir.path())).await.unwrap();
    let grace = email("grace@example.com");

    let query = OrderQuery {
        search: "oxford".to_string(),
        status: Some(OrderStatus::Shipped),
    };
    assert_eq!(state.orders().search(&grace, &query).await.unwrap().len(), 1);
    assert!(
        state
            .orders()
            .has_purchased(&grace, &ProductId::from(2))
            .await
            .unwrap()
    );

    let err = state
        .order_for(&email("ada@example.com"), OrderId::new(2))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Order(OrderError::NotFound(_))));
    assert!(matches!(
        state.orders().order(OrderId::new(42)).await,
        Err(OrderError::NotFound(_))
    ));
}

// =============================================================================
// Review Tests
// =============================================================================

#[tokio::test]
async fn test_review_lifecycle_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_config(&seeded_config(dir.path())).await.unwrap();
    let oxford = ProductId::from(2);
    let reviews = state.reviews();

    let stats = reviews.stats(&oxford).await.unwrap();
    assert_eq!(stats.average_rating, Decimal::new(43, 1));
    assert_eq!(stats.total_reviews, 3);

    let ada = email("ada@example.com");
    let created = reviews
        .create(NewReview::new(oxford.clone(), ada.clone(), Rating::new(1).unwrap()))
        .await
        .unwrap();
    assert_eq!(created.user_name, "Anonymous");
    assert!(matches!(
        reviews
            .create(NewReview::new(oxford.clone(), ada, Rating::new(5).unwrap()))
            .await,
        Err(ReviewError::AlreadyReviewed { .. })
    ));

    // 4 + 5 + 4 + 1 = 14 over 4 reviews
    let stats = reviews.stats(&oxford).await.unwrap();
    assert_eq!(stats.average_rating, Decimal::new(35, 1));
    assert_eq!(
        stats.breakdown_desc().collect::<Vec<_>>(),
        vec![(5, 1), (4, 2), (3, 0), (2, 0), (1, 1)]
    );

    reviews
        .update(
            created.id,
            ReviewUpdate {
                rating: Some(Rating::new(3).unwrap()),
                comment: None,
            },
        )
        .await
        .unwrap();
    reviews.delete(created.id).await.unwrap();
    assert_eq!(reviews.stats(&oxford).await.unwrap().total_reviews, 3);
}

#[tokio::test]
async fn test_unreviewed_purchases_after_checkout() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::from_config(&seeded_config(dir.path())).await.unwrap();
    let grace = email("grace@example.com");

    state.add_product_to_cart(&ProductId::from(1), None, None).await.unwrap();
    state
        .place_order(grace.clone(), shipping_address("grace@example.com"), "PayPal")
        .await
        .unwrap();

    // the Oxford shirt was already reviewed
    let pending = state.unreviewed_purchases(&grace).await.unwrap();
    assert_eq!(pending, [ProductId::from(1)]);
}

// =============================================================================
// Start-up Tests
// =============================================================================

#[tokio::test]
async fn test_shared_storage_key_fails_start_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = file_config(dir.path());
    config.wishlist_key = config.cart_key.clone();

    let err = AppState::from_config(&config).await.unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::SharedStorageKey(_))));
}

#[tokio::test]
async fn test_bad_order_fixture_fails_start_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(&path, r#"[{"Id": "not a number"}]"#).unwrap();

    let mut config = file_config(dir.path());
    config.orders_path = Some(path);
    assert!(AppState::from_config(&config).await.is_err());
}

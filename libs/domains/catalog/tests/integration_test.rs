//! Integration tests for the Catalog domain
//!
//! These run against a real MongoDB via testcontainers and need Docker:
//!
//! ```text
//! cargo test -p domain_catalog --test integration_test -- --ignored
//! ```

use std::sync::Arc;

use domain_catalog::*;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};

async fn catalog(
    mongo: &TestMongo,
    builder: &TestDataBuilder,
) -> CatalogProductRepository<MongoProductStore> {
    let settings = DatabaseSettings::new(
        mongo.connection_string(),
        builder.database_name(),
        "Products",
    )
    .with_timeouts(5, 5);
    let context = CatalogContext::initialize(&settings)
        .await
        .expect("catalog context should initialize");
    CatalogProductRepository::with_tracing(Arc::new(context))
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

// ============================================================================
// Seeding
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_initialize_seeds_empty_collection_once() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("seed_once");

    let repository = catalog(&mongo, &builder).await;
    assert_eq!(repository.get_products().await.len(), 6);

    // A second context against the same collection must not duplicate the seed set
    let repository = catalog(&mongo, &builder).await;
    let products = repository.get_products().await;
    assert_same_ids(&ids(&products), &["1", "2", "3", "4", "5", "6"], "seeded ids");
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_seeded_iphone_lifecycle() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("iphone_lifecycle");
    let repository = catalog(&mongo, &builder).await;

    let iphone = repository.get_product("1").await;
    assert_eq!(iphone.name, "IPhone X");
    assert_eq!(iphone.category, "Smart Phone");
    assert_eq!(iphone.price, 950.00);

    let phones = repository.get_product_by_category("Smart Phone").await;
    assert!(phones.contains(&iphone));

    assert!(repository.delete_product("1").await);
    assert!(repository.get_product("1").await.is_empty());
    assert!(!repository.delete_product("1").await);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_product() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let repository = catalog(&mongo, &builder).await;

    let mut product = Product::new(
        builder.product_id("main"),
        builder.name("product", "main"),
        "Tablets",
        builder.price(),
    )
    .with_summary("Integration test product")
    .with_brand("Acme");

    repository.create_product(&mut product).await;

    let retrieved = repository.get_product(&product.id).await;
    assert_eq!(retrieved, product);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_assigns_id_when_missing() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("create_assigns_id");
    let repository = catalog(&mongo, &builder).await;

    let mut product = Product::new("", builder.name("product", "anon"), "Tablets", 10.0);
    repository.create_product(&mut product).await;

    assert!(!product.is_empty());
    assert_eq!(repository.get_product(&product.id).await, product);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_missing_product_leaves_collection_unchanged() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("delete_missing");
    let repository = catalog(&mongo, &builder).await;

    let before = repository.get_products().await;
    assert!(!repository.delete_product(&builder.product_id("ghost")).await);
    assert_eq!(repository.get_products().await, before);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_replaces_full_document() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("update_replaces");
    let repository = catalog(&mongo, &builder).await;

    let original = repository.get_product("2").await;
    assert!(original.brand.is_some());
    assert!(!original.summary.is_empty());

    let replacement = Product::new("2", "Samsung 10 Lite", "Refurbished", 420.0);
    assert!(repository.update_product(replacement.clone()).await);

    let stored = repository.get_product("2").await;
    assert_eq!(stored, replacement);
    assert!(stored.brand.is_none());
    assert!(stored.summary.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_unknown_id_returns_false() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("update_unknown");
    let repository = catalog(&mongo, &builder).await;

    let product = Product::new(builder.product_id("nope"), "Ghost", "None", 1.0);
    assert!(!repository.update_product(product).await);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_category_and_name_filters_are_exact() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("exact_filters");
    let repository = catalog(&mongo, &builder).await;

    let phones = repository.get_product_by_category("Smart Phone").await;
    assert_same_ids(&ids(&phones), &["1", "2", "5"], "smart phones");

    assert!(repository.get_product_by_category("smart phone").await.is_empty());
    assert!(repository.get_product_by_category("Laptops").await.is_empty());

    let named = repository.get_product_by_name("LG G7 ThinQ").await;
    assert_same_ids(&ids(&named), &["6"], "by name");
    assert!(repository.get_product_by_name("LG").await.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unreachable_store_degrades() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("unreachable");
    let repository = catalog(&mongo, &builder).await;

    // Stopping the container leaves the repository with a dead server
    drop(mongo);

    let product = assert_some(Some(repository.get_product("1").await), "degraded product");
    assert!(product.is_empty());
    assert!(repository.get_products().await.is_empty());
    assert!(!repository.delete_product("1").await);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_initialize_fails_for_unreachable_server() {
    let settings = DatabaseSettings::new("mongodb://127.0.0.1:1", "CatalogDb", "Products")
        .with_timeouts(1, 1);
    let result = CatalogContext::initialize(&settings).await;
    assert!(matches!(result, Err(CatalogError::ConnectionFailed(_))));
}

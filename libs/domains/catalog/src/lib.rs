//! Catalog Domain
//!
//! Data access for the product catalog, backed by a single MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  ProductRepository   │  ← CRUD surface, timing, catch-log-degrade
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │    CatalogContext    │  ← connection, collection handle, seeding
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │     ProductStore     │  ← document operations (MongoDB implementation)
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_catalog::{
//!     CatalogContext, CatalogProductRepository, DatabaseSettings, ProductRepository,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = DatabaseSettings::new("mongodb://localhost:27017", "CatalogDb", "Products");
//!
//! // Connects, resolves the collection and seeds it if empty
//! let context = CatalogContext::initialize(&settings).await?;
//! let repository = CatalogProductRepository::with_tracing(Arc::new(context));
//!
//! let phones = repository.get_product_by_category("Smart Phone").await;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod instrumentation;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod seed;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use context::CatalogContext;
pub use error::{CatalogError, CatalogResult};
pub use instrumentation::{ExecutionLog, Operation, Stopwatch, TracingExecutionLog};
pub use models::Product;
pub use mongo::MongoProductStore;
pub use repository::{CatalogProductRepository, CatalogProductRepositoryBuilder, ProductRepository};
pub use settings::DatabaseSettings;
pub use store::{ProductStore, WriteOutcome};

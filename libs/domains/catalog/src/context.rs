//! Catalog connection context
//!
//! Owns the product collection handle for the lifetime of the process and
//! populates an empty collection with the seed set on startup.

use core_config::FromEnv;
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::mongo::{self, MongoProductStore};
use crate::seed;
use crate::settings::DatabaseSettings;
use crate::store::ProductStore;

pub struct CatalogContext<S: ProductStore = MongoProductStore> {
    products: S,
}

impl<S: ProductStore> CatalogContext<S> {
    /// Wrap an already resolved collection handle
    pub fn new(products: S) -> Self {
        Self { products }
    }

    /// The product collection handle
    pub fn products(&self) -> &S {
        &self.products
    }

    /// Insert the seed set if the collection holds no documents
    ///
    /// Returns how many products were inserted; zero when the collection was
    /// already populated.
    pub async fn seed_if_empty(&self) -> CatalogResult<usize> {
        let existing = self.products.count().await?;
        if existing > 0 {
            debug!(existing, "Product collection already populated, skipping seed");
            return Ok(0);
        }

        let products = seed::products();
        let inserted = products.len();
        self.products.insert_many(products).await?;

        info!(inserted, "Seeded product collection");
        Ok(inserted)
    }
}

impl CatalogContext<MongoProductStore> {
    /// Connect, resolve the configured collection and seed it if empty
    ///
    /// Any failure here is fatal for startup and is returned to the caller.
    pub async fn initialize(settings: &DatabaseSettings) -> CatalogResult<Self> {
        settings.validate()?;

        let client = mongo::connect(settings).await?;
        let db = client.database(&settings.database_name);
        let context = Self::new(MongoProductStore::new(&db, &settings.collection_name));

        context.seed_if_empty().await?;

        info!(
            database = %settings.database_name,
            collection = %settings.collection_name,
            "Catalog context ready"
        );
        Ok(context)
    }

    /// [`CatalogContext::initialize`] with settings read from the environment
    pub async fn from_env() -> CatalogResult<Self> {
        let settings = DatabaseSettings::from_env()?;
        Self::initialize(&settings).await
    }
}

//! MongoDB implementation of ProductStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{Acknowledgment, ClientOptions},
    Client, Collection, Database,
};
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;
use crate::settings::DatabaseSettings;
use crate::store::{ProductStore, WriteOutcome};

/// Connect to MongoDB using the catalog settings
///
/// Applies pool and timeout settings, then pings the configured database so
/// an unreachable server fails here rather than on the first query.
pub async fn connect(settings: &DatabaseSettings) -> CatalogResult<Client> {
    info!(
        database = %settings.database_name,
        collection = %settings.collection_name,
        "Connecting to MongoDB"
    );

    let mut options = ClientOptions::parse(&settings.connection_string).await?;

    options.max_pool_size = Some(settings.max_pool_size);
    options.min_pool_size = Some(settings.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(settings.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(settings.server_selection_timeout_secs));

    if let Some(ref app_name) = settings.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database(&settings.database_name)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Handle to the product collection
#[derive(Clone, Debug)]
pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Writes are acknowledged unless the collection uses `w: 0`
    fn acknowledges_writes(&self) -> bool {
        !matches!(
            self.collection.write_concern().and_then(|wc| wc.w.as_ref()),
            Some(Acknowledgment::Nodes(0))
        )
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn insert_one(&self, product: Product) -> CatalogResult<()> {
        self.collection.insert_one(&product).await?;
        Ok(())
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<()> {
        if products.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(&products).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> CatalogResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: Document) -> CatalogResult<Vec<Product>> {
        let cursor = self.collection.find(filter).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, filter: Document) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self, replacement))]
    async fn replace_one(
        &self,
        filter: Document,
        replacement: Product,
    ) -> CatalogResult<WriteOutcome> {
        let result = self.collection.replace_one(filter, &replacement).await?;
        Ok(WriteOutcome {
            acknowledged: self.acknowledges_writes(),
            matched: result.matched_count,
            affected: result.modified_count,
        })
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, filter: Document) -> CatalogResult<WriteOutcome> {
        let result = self.collection.delete_one(filter).await?;
        Ok(WriteOutcome {
            acknowledged: self.acknowledges_writes(),
            matched: result.deleted_count,
            affected: result.deleted_count,
        })
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::context::CatalogContext;
use crate::error::{CatalogError, CatalogResult};
use crate::instrumentation::{ExecutionLog, Operation, Stopwatch, TracingExecutionLog};
use crate::models::Product;
use crate::store::{filters, ProductStore};

/// Repository trait for Product persistence
///
/// Store failures never reach the caller. Each operation logs the failure
/// and returns a degraded default instead: an empty list, the empty
/// product, or `false`. A miss and an unreachable store look the same.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product, assigning an id first if it has none
    async fn create_product(&self, product: &mut Product);

    /// `true` only if exactly one product was removed
    async fn delete_product(&self, id: &str) -> bool;

    /// The product with this id, or the empty product
    async fn get_product(&self, id: &str) -> Product;

    async fn get_product_by_category(&self, category: &str) -> Vec<Product>;

    async fn get_product_by_name(&self, name: &str) -> Vec<Product>;

    async fn get_products(&self) -> Vec<Product>;

    /// Replace the stored document carrying `product.id`
    ///
    /// `true` only if exactly one document was modified.
    async fn update_product(&self, product: Product) -> bool;
}

/// ProductRepository over the catalog context's collection handle
pub struct CatalogProductRepository<S: ProductStore> {
    context: Arc<CatalogContext<S>>,
    log: Arc<dyn ExecutionLog>,
}

impl<S: ProductStore> CatalogProductRepository<S> {
    pub fn new(context: Arc<CatalogContext<S>>, log: Arc<dyn ExecutionLog>) -> Self {
        Self { context, log }
    }

    /// Repository that writes timings through `tracing`
    pub fn with_tracing(context: Arc<CatalogContext<S>>) -> Self {
        Self::new(context, Arc::new(TracingExecutionLog))
    }

    pub fn builder() -> CatalogProductRepositoryBuilder<S> {
        CatalogProductRepositoryBuilder::default()
    }

    fn store(&self) -> &S {
        self.context.products()
    }

    /// Record the call and fall back to `degraded` on failure
    fn settle<T>(
        &self,
        operation: Operation,
        stopwatch: Stopwatch,
        result: CatalogResult<T>,
        degraded: impl FnOnce() -> T,
    ) -> T {
        match result {
            Ok(value) => {
                self.log.record(operation, stopwatch.elapsed(), None);
                value
            }
            Err(err) => {
                let detail = err.failure_detail();
                self.log.record(operation, stopwatch.elapsed(), Some(&detail));
                degraded()
            }
        }
    }
}

#[async_trait]
impl<S: ProductStore> ProductRepository for CatalogProductRepository<S> {
    async fn create_product(&self, product: &mut Product) {
        product.ensure_id();

        let stopwatch = Stopwatch::start();
        let result = self.store().insert_one(product.clone()).await;
        self.settle(Operation::CreateProduct, stopwatch, result, || ());
    }

    async fn delete_product(&self, id: &str) -> bool {
        let filter = filters::by_id(id);

        let stopwatch = Stopwatch::start();
        let result = self.store().delete_one(filter).await;
        self.settle(Operation::DeleteProduct, stopwatch, result, Default::default)
            .is_single_write()
    }

    async fn get_product(&self, id: &str) -> Product {
        let filter = filters::by_id(id);

        let stopwatch = Stopwatch::start();
        let result = self.store().find_one(filter).await;
        self.settle(Operation::GetProduct, stopwatch, result, || None)
            .unwrap_or_default()
    }

    async fn get_product_by_category(&self, category: &str) -> Vec<Product> {
        let filter = filters::by_category(category);

        let stopwatch = Stopwatch::start();
        let result = self.store().find(filter).await;
        self.settle(Operation::GetProductByCategory, stopwatch, result, Vec::new)
    }

    async fn get_product_by_name(&self, name: &str) -> Vec<Product> {
        let filter = filters::by_name(name);

        let stopwatch = Stopwatch::start();
        let result = self.store().find(filter).await;
        self.settle(Operation::GetProductByName, stopwatch, result, Vec::new)
    }

    async fn get_products(&self) -> Vec<Product> {
        let stopwatch = Stopwatch::start();
        let result = self.store().find(filters::all()).await;
        self.settle(Operation::GetProducts, stopwatch, result, Vec::new)
    }

    async fn update_product(&self, product: Product) -> bool {
        let filter = filters::by_id(&product.id);

        let stopwatch = Stopwatch::start();
        let result = self.store().replace_one(filter, product).await;
        self.settle(Operation::UpdateProduct, stopwatch, result, Default::default)
            .is_single_write()
    }
}

/// Builder that refuses to produce a repository with a missing collaborator
pub struct CatalogProductRepositoryBuilder<S: ProductStore> {
    context: Option<Arc<CatalogContext<S>>>,
    log: Option<Arc<dyn ExecutionLog>>,
}

impl<S: ProductStore> Default for CatalogProductRepositoryBuilder<S> {
    fn default() -> Self {
        Self {
            context: None,
            log: None,
        }
    }
}

impl<S: ProductStore> CatalogProductRepositoryBuilder<S> {
    pub fn context(mut self, context: Arc<CatalogContext<S>>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn execution_log(mut self, log: Arc<dyn ExecutionLog>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn build(self) -> CatalogResult<CatalogProductRepository<S>> {
        let context = self
            .context
            .ok_or(CatalogError::MissingDependency("CatalogContext"))?;
        let log = self
            .log
            .ok_or(CatalogError::MissingDependency("ExecutionLog"))?;
        Ok(CatalogProductRepository::new(context, log))
    }
}

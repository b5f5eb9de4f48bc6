//! Collection handle abstraction
//!
//! [`ProductStore`] is the narrow set of document operations the catalog
//! needs. [`crate::mongo::MongoProductStore`] implements it over a MongoDB
//! collection; tests substitute a mock.

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::CatalogResult;
use crate::models::Product;

/// Result of a replace or delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Whether the server acknowledged the write
    pub acknowledged: bool,
    /// Documents matched by the filter
    pub matched: u64,
    /// Documents modified or deleted
    pub affected: u64,
}

impl WriteOutcome {
    pub fn acknowledged(matched: u64, affected: u64) -> Self {
        Self {
            acknowledged: true,
            matched,
            affected,
        }
    }

    /// Acknowledged and touched exactly one document
    pub fn is_single_write(&self) -> bool {
        self.acknowledged && self.affected == 1
    }
}

/// Document operations against the product collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert_one(&self, product: Product) -> CatalogResult<()>;

    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<()>;

    /// Number of documents in the collection
    async fn count(&self) -> CatalogResult<u64>;

    async fn find(&self, filter: Document) -> CatalogResult<Vec<Product>>;

    async fn find_one(&self, filter: Document) -> CatalogResult<Option<Product>>;

    async fn replace_one(&self, filter: Document, replacement: Product)
        -> CatalogResult<WriteOutcome>;

    async fn delete_one(&self, filter: Document) -> CatalogResult<WriteOutcome>;
}

/// Single-field equality filters
pub mod filters {
    use mongodb::bson::{doc, Document};

    pub fn by_id(id: &str) -> Document {
        doc! { "_id": id }
    }

    pub fn by_category(category: &str) -> Document {
        doc! { "category": category }
    }

    pub fn by_name(name: &str) -> Document {
        doc! { "name": name }
    }

    /// Matches every document
    pub fn all() -> Document {
        Document::new()
    }
}

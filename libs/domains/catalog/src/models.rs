use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product entity - represents a product stored in MongoDB
///
/// `Product::default()` is the empty product returned when a lookup
/// finds nothing or the store fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Short teaser shown in listings
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: String,
    #[serde(default)]
    pub price: f64,
    /// Brand or manufacturer grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_file(mut self, image_file: impl Into<String>) -> Self {
        self.image_file = image_file.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// True for the empty product (no identifier assigned)
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Assign a fresh identifier if none is set, returning the product's id
    pub fn ensure_id(&mut self) -> &str {
        if self.id.trim().is_empty() {
            self.id = Uuid::now_v7().to_string();
        }
        &self.id
    }
}

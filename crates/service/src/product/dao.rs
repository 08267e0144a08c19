use std::sync::Arc;

use chrono::Utc;

use models::product;

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Entity access object: owns the load-then-commit sequences and is the only
/// place a missing record becomes `ServiceError::NotFound`. Absence is always
/// detected before any mutation is attempted.
pub struct ProductDao<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductDao<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new product; the store assigns the id. No validation beyond
    /// what the store enforces.
    pub async fn insert_product(&self, product: product::ActiveModel) -> Result<product::Model, ServiceError> {
        self.repo.insert(product).await
    }

    /// Eager single-record lookup; an absent id fails at lookup time.
    pub async fn select_product(&self, id: i64) -> Result<product::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))
    }

    /// Load the current record, change its name, stamp `updated_at`, commit.
    /// Identifier, price, stock and `created_at` are untouched.
    pub async fn update_product_name(&self, id: i64, name: &str) -> Result<product::Model, ServiceError> {
        let mut loaded = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;

        loaded.name = name.to_string();
        loaded.updated_at = Utc::now().into();

        self.repo.save(loaded).await
    }

    /// Delete goes through the same load-first discipline as update: the row
    /// is fetched, and only a loaded model is handed to the store for removal.
    pub async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        let loaded = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;

        self.repo.delete(&loaded).await
    }
}

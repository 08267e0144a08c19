use std::sync::Arc;

use chrono::Utc;
use sea_orm::{NotSet, Set};
use tracing::{info, instrument};

use models::product;

use crate::errors::ServiceError;
use crate::product::dao::ProductDao;
use crate::product::dto::{CreateProductRequest, ProductResponse};
use crate::product::repository::ProductRepository;

/// Boundary-facing service: translates between transfer shapes and the
/// entity and delegates persistence decisions to the DAO. It adds no error
/// translation of its own; NotFound and store failures pass through.
pub struct ProductService<R: ProductRepository> {
    dao: ProductDao<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { dao: ProductDao::new(repo) }
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let product = self.dao.select_product(id).await?;
        Ok(product.into())
    }

    /// Returns the stored record including the assigned id, so the caller can
    /// address the record without an extra round trip.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_product(&self, request: CreateProductRequest) -> Result<ProductResponse, ServiceError> {
        let now = Utc::now().into();
        let draft = product::ActiveModel {
            id: NotSet,
            name: Set(request.name),
            price: Set(request.price),
            stock: Set(request.stock),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = self.dao.insert_product(draft).await?;
        info!(id = saved.id, "product_created");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn rename_product(&self, id: i64, new_name: &str) -> Result<ProductResponse, ServiceError> {
        let changed = self.dao.update_product_name(id, new_name).await?;
        info!(id = changed.id, "product_renamed");
        Ok(changed.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        self.dao.delete_product(id).await?;
        info!(id, "product_deleted");
        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, Unchanged};

use models::product;

use crate::errors::ServiceError;

/// Storage contract the product layers depend on. Connectivity and
/// constraint failures surface as `ServiceError::Db` and pass through to the
/// caller untranslated.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new record; `id` must be `NotSet` and is assigned by the store.
    async fn insert(&self, product: product::ActiveModel) -> Result<product::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError>;
    /// Upsert an already-identified model: update the row with its id, or
    /// insert it under that id when no such row exists. Idempotent and total.
    async fn save(&self, product: product::Model) -> Result<product::Model, ServiceError>;
    /// Remove the row matching the model's id.
    async fn delete(&self, product: &product::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, product: product::ActiveModel) -> Result<product::Model, ServiceError> {
        product.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, product: product::Model) -> Result<product::Model, ServiceError> {
        // Write every column back under the existing key so multi-field
        // mutations land in one commit; a missing row falls back to an insert
        // with the same id, keeping save total.
        let am = product::ActiveModel {
            id: Unchanged(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            stock: Set(product.stock),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        };
        match am.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => {
                let am = product::ActiveModel {
                    id: Set(product.id),
                    name: Set(product.name),
                    price: Set(product.price),
                    stock: Set(product.stock),
                    created_at: Set(product.created_at),
                    updated_at: Set(product.updated_at),
                };
                am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
            }
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn delete(&self, product: &product::Model) -> Result<(), ServiceError> {
        product::Entity::delete_by_id(product.id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

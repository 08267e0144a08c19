use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted product record.
///
/// `id` is assigned by the store at insert and never changes afterwards.
/// Timestamps are internal bookkeeping; the boundary DTOs in the service
/// crate never carry them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

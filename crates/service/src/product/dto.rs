use serde::{Deserialize, Serialize};

use models::product;

/// Inbound transfer shape: no id, no timestamps. The store assigns the id and
/// the service stamps the timestamps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

/// Outbound transfer shape. Timestamps stay internal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            stock: model.stock,
        }
    }
}

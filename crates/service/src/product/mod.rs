//! Product module: three-layer architecture (repository, dao, service).
//!
//! Updates go through the tracked-mutation protocol: load the current row,
//! mutate fields on the loaded model, commit it back with a single save.

pub mod dao;
pub mod dto;
pub mod repository;
pub mod service;

pub use dao::ProductDao;
pub use dto::{CreateProductRequest, ProductResponse};
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;

//! Service layer for the product store.
//! - `product::repository` is the minimal storage contract (insert, find,
//!   save, delete) over the persisted table.
//! - `product::dao` orchestrates load-then-commit sequences and not-found
//!   detection; it is the only caller of the repository.
//! - `product::service` maps between boundary transfer shapes and the entity.

pub mod errors;
pub mod product;

pub mod db;
pub mod product;

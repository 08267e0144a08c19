//! Create `product` table.
//! One row per product; the store assigns the integer key at insert time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(big_integer(Product::Id).auto_increment().primary_key())
                    .col(string_len(Product::Name, 256).not_null())
                    .col(big_integer(Product::Price).not_null())
                    .col(big_integer(Product::Stock).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Price,
    Stock,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Sku)
                            .string_len(11)
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_len(Products::Name, 50))
                    .col(string_len(Products::Brand, 50))
                    .col(string_len(Products::Size, 15).default("ST"))
                    .col(double(Products::Price))
                    .col(text(Products::PrincipalImage))
                    .col(json(Products::OtherImages).default("[]"))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_brand")
                    .table(Products::Table)
                    .col(Products::Brand)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Sku,
    Name,
    Brand,
    Size,
    Price,
    PrincipalImage,
    OtherImages,
    CreatedAt,
    UpdatedAt,
}

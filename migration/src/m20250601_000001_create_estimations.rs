// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Estimations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Estimations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Estimations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Estimations::Title).string_len(500).not_null())
                    .col(ColumnDef::new(Estimations::MinValue).big_integer().not_null())
                    .col(ColumnDef::new(Estimations::MaxValue).big_integer().not_null())
                    .col(ColumnDef::new(Estimations::SourceUrl).text())
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_estimations_created_at")
                    .table(Estimations::Table)
                    .col(Estimations::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Estimations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Estimations {
    Table,
    Id,
    CreatedAt,
    Title,
    MinValue,
    MaxValue,
    SourceUrl,
}

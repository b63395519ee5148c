//! Create `stations` table.
//!
//! Bike counters are guarded by CHECK constraints so that concurrent relative
//! updates can never drive them below zero.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stations::LocationStreet).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Stations::BikesAvailable)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stations::BikesAvailable).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stations::BikesTotal)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stations::BikesTotal).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stations::CreatedAt)
                            .timestamp_with_time_zone()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stations { Table, Id, LocationStreet, BikesAvailable, BikesTotal, CreatedAt }

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rentals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rentals::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Rentals::BicycleId).big_integer().not_null())
                    .col(ColumnDef::new(Rentals::StationStartId).big_integer().not_null())
                    .col(ColumnDef::new(Rentals::StationEndId).big_integer().not_null())
                    .col(ColumnDef::new(Rentals::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Rentals::EndTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Rentals::TotalCost).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_user")
                            .from(Rentals::Table, Rentals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_bicycle")
                            .from(Rentals::Table, Rentals::BicycleId)
                            .to(Bicycles::Table, Bicycles::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_station_start")
                            .from(Rentals::Table, Rentals::StationStartId)
                            .to(Stations::Table, Stations::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_station_end")
                            .from(Rentals::Table, Rentals::StationEndId)
                            .to(Stations::Table, Stations::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rentals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rentals { Table, Id, UserId, BicycleId, StationStartId, StationEndId, StartTime, EndTime, TotalCost }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Bicycles { Table, Id }

#[derive(DeriveIden)]
enum Stations { Table, Id }

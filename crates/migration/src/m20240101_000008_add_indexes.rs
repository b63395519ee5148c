use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Profile page: latest bookings / rentals per user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookings_user_created")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .col(Bookings::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rentals_user_start")
                    .table(Rentals::Table)
                    .col(Rentals::UserId)
                    .col(Rentals::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bicycles_station")
                    .table(Bicycles::Table)
                    .col(Bicycles::StationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_user_created").table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rentals_user_start").table(Rentals::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bicycles_station").table(Bicycles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings { Table, UserId, CreatedAt }

#[derive(DeriveIden)]
enum Rentals { Table, UserId, StartTime }

#[derive(DeriveIden)]
enum Bicycles { Table, StationId }

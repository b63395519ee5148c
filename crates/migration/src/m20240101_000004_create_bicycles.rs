use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bicycles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bicycles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bicycles::StationId).big_integer().not_null())
                    .col(ColumnDef::new(Bicycles::Status).string_len(64).not_null())
                    .col(ColumnDef::new(Bicycles::LastService).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bicycles_station")
                            .from(Bicycles::Table, Bicycles::StationId)
                            .to(Stations::Table, Stations::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bicycles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bicycles { Table, Id, StationId, Status, LastService }

#[derive(DeriveIden)]
enum Stations { Table, Id }

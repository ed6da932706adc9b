use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000002_create_accommodation_table::Accommodation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(integer_uniq(Location::AccommodationId))
                    .col(string(Location::City))
                    .col(string(Location::State))
                    .col(string(Location::Country))
                    .col(string_len(Location::ZipCode, 5))
                    .col(string(Location::Address))
                    .col(timestamp_with_time_zone(Location::CreatedAt))
                    .col(timestamp_with_time_zone(Location::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_accommodation_id")
                            .from(Location::Table, Location::AccommodationId)
                            .to(Accommodation::Table, Accommodation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    AccommodationId,
    City,
    State,
    Country,
    ZipCode,
    Address,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(integer(Accommodation::UserId))
                    .col(string(Accommodation::Name))
                    .col(integer(Accommodation::Rating))
                    .col(string(Accommodation::Category))
                    .col(string(Accommodation::ImageUrl))
                    .col(integer(Accommodation::Reputation))
                    .col(string(Accommodation::ReputationBadge))
                    .col(big_integer(Accommodation::Price))
                    .col(big_integer(Accommodation::Availability))
                    .col(timestamp_with_time_zone(Accommodation::CreatedAt))
                    .col(timestamp_with_time_zone(Accommodation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_user_id")
                            .from(Accommodation::Table, Accommodation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accommodation_user_id")
                    .table(Accommodation::Table)
                    .col(Accommodation::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    UserId,
    Name,
    Rating,
    Category,
    ImageUrl,
    Reputation,
    ReputationBadge,
    Price,
    Availability,
    CreatedAt,
    UpdatedAt,
}

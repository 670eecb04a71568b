use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000002_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExtraService::Table)
                    .if_not_exists()
                    .col(pk_auto(ExtraService::Id))
                    .col(integer(ExtraService::HotelId))
                    .col(string(ExtraService::Name))
                    .col(double(ExtraService::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extra_service_hotel_id")
                            .from(ExtraService::Table, ExtraService::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExtraService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExtraService {
    Table,
    Id,
    HotelId,
    Name,
    Price,
}

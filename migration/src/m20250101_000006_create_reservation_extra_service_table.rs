use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000004_create_extra_service_table::ExtraService,
    m20250101_000005_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationExtraService::Table)
                    .if_not_exists()
                    .col(integer(ReservationExtraService::ReservationId))
                    .col(integer(ReservationExtraService::ExtraServiceId))
                    .primary_key(
                        Index::create()
                            .col(ReservationExtraService::ReservationId)
                            .col(ReservationExtraService::ExtraServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_extra_service_reservation_id")
                            .from(
                                ReservationExtraService::Table,
                                ReservationExtraService::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_extra_service_extra_service_id")
                            .from(
                                ReservationExtraService::Table,
                                ReservationExtraService::ExtraServiceId,
                            )
                            .to(ExtraService::Table, ExtraService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationExtraService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationExtraService {
    Table,
    ReservationId,
    ExtraServiceId,
}

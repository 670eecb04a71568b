use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250101_000001_create_user_table::User, m20250101_000003_create_room_table::Room};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer_null(Reservation::RoomId))
                    .col(date(Reservation::DateEntry))
                    .col(date(Reservation::DepartureDate))
                    .col(string(Reservation::State).default("active"))
                    .col(string_null(Reservation::PaymentMethod))
                    .col(string(Reservation::PaymentStatus).default("pending"))
                    .col(double(Reservation::TotalPrice))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap scans filter on room and state
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_id_state")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    RoomId,
    DateEntry,
    DepartureDate,
    State,
    PaymentMethod,
    PaymentStatus,
    TotalPrice,
    CreatedAt,
}

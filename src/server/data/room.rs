//! Room data repository.
//!
//! Holds the room store side of the availability engine: status writes and the
//! replacement lookup used when a room is deleted.

use entity::room::RoomStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, Room};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a room with status `AVAILABLE`.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            tipo: ActiveValue::Set(params.tipo),
            capacity: ActiveValue::Set(params.capacity),
            price: ActiveValue::Set(params.price),
            number: ActiveValue::Set(params.number),
            status: ActiveValue::Set(RoomStatus::Available),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Checks whether a room number is already taken within a hotel.
    pub async fn number_exists_in_hotel(&self, hotel_id: i32, number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Number.eq(number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes the cached occupancy status of a room.
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching room found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: RoomStatus) -> Result<(), DbErr> {
        entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.eq(id))
            .col_expr(entity::room::Column::Status, Expr::value(status))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds an `AVAILABLE` room of the same hotel and type, skipping `exclude_ids`.
    ///
    /// The lowest id wins so repeated runs pick the same replacement.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel the replacement must belong to
    /// - `tipo` - Room type the replacement must match
    /// - `exclude_ids` - Rooms that must not be chosen (the room being deleted and any
    ///   room with an overlapping active reservation)
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - A suitable replacement
    /// - `Ok(None)` - No room qualifies
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_replacement(
        &self,
        hotel_id: i32,
        tipo: &str,
        exclude_ids: &[i32],
    ) -> Result<Option<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Tipo.eq(tipo))
            .filter(entity::room::Column::Status.eq(RoomStatus::Available));

        if !exclude_ids.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(exclude_ids.iter().copied()));
        }

        let entity = query
            .order_by_asc(entity::room::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Deletes a room. Remaining reservations keep their history with a null room reference.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

//! Room service for business logic.
//!
//! Besides room CRUD this owns the deletion pipeline: each active reservation on the
//! deleted room is moved to a free room of the same type in the same hotel, or cancelled
//! when none exists.

use entity::{reservation::ReservationState, room::RoomStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{hotel::HotelRepository, reservation::ReservationRepository, room::RoomRepository},
    error::{booking::BookingError, AppError},
    model::room::{CreateRoomParams, DeleteRoomOutcome, Room},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room in an existing hotel.
    ///
    /// # Returns
    /// - `Ok(Room)` - The new room, status `AVAILABLE`
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    /// - `Err(AppError::BookingErr(Conflict))` - Room number already used in the hotel
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        if HotelRepository::new(self.db)
            .find_by_id(params.hotel_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        let room_repo = RoomRepository::new(self.db);
        if room_repo
            .number_exists_in_hotel(params.hotel_id, &params.number)
            .await?
        {
            return Err(BookingError::Conflict(format!(
                "room number {} already exists in this hotel",
                params.number
            ))
            .into());
        }

        let room = room_repo.create(params).await?;

        Ok(room)
    }

    pub async fn get(&self, room_id: i32) -> Result<Option<Room>, AppError> {
        let room = RoomRepository::new(self.db).find_by_id(room_id).await?;

        Ok(room)
    }

    /// Lists the rooms of a hotel.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Rooms ordered by id
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<Room>, AppError> {
        if HotelRepository::new(self.db)
            .find_by_id(hotel_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        let rooms = RoomRepository::new(self.db).get_by_hotel(hotel_id).await?;

        Ok(rooms)
    }

    /// Deletes a room, reassigning or cancelling its active reservations first.
    ///
    /// For each active reservation the replacement is the lowest-id room of the same
    /// hotel and type that is `AVAILABLE` and holds no other active reservation overlapping
    /// the stay. Each reservation is handled in its own transaction and re-read inside it,
    /// so a partially completed run can be repeated. The room itself is deleted in a final
    /// transaction that first checks no active reservation reached it in the meantime; if
    /// one did, the pass runs again.
    ///
    /// # Arguments
    /// - `room_id` - Room to delete
    ///
    /// # Returns
    /// - `Ok(DeleteRoomOutcome)` - Room deleted; carries the number of reservations moved
    ///   or cancelled
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::DbErr)` - Database error; reservations handled before the failure
    ///   stay handled
    pub async fn delete(&self, room_id: i32) -> Result<DeleteRoomOutcome, AppError> {
        let Some(room) = RoomRepository::new(self.db).find_by_id(room_id).await? else {
            return Err(AppError::NotFound("Room not found".to_string()));
        };

        let mut affected_reservations = 0;
        loop {
            let active = ReservationRepository::new(self.db)
                .get_active_by_room(room.id)
                .await?;

            for candidate in active {
                if self.relocate_or_cancel(&room, candidate.id).await? {
                    affected_reservations += 1;
                }
            }

            let txn = self.db.begin().await?;
            let remaining = ReservationRepository::new(&txn)
                .get_active_by_room(room.id)
                .await?;
            if !remaining.is_empty() {
                txn.rollback().await?;
                continue;
            }

            RoomRepository::new(&txn).delete(room.id).await?;
            txn.commit().await?;
            break;
        }

        tracing::info!(room_id = room.id, affected_reservations, "Room deleted");

        Ok(DeleteRoomOutcome {
            affected_reservations,
        })
    }

    /// Moves one reservation off `room` or cancels it, in a single transaction.
    ///
    /// Returns `false` when the reservation was already moved or closed.
    async fn relocate_or_cancel(&self, room: &Room, reservation_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);
        let room_repo = RoomRepository::new(&txn);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Ok(false);
        };
        if reservation.state != ReservationState::Active || reservation.room_id != Some(room.id) {
            return Ok(false);
        }

        let mut excluded: Vec<i32> = reservation_repo
            .room_ids_with_active_overlap(
                reservation.date_entry,
                reservation.departure_date,
                reservation.id,
            )
            .await?
            .into_iter()
            .collect();
        excluded.push(room.id);

        match room_repo
            .find_replacement(room.hotel_id, &room.tipo, &excluded)
            .await?
        {
            Some(replacement) => {
                reservation_repo
                    .reassign_room(reservation.id, replacement.id)
                    .await?;
                room_repo
                    .set_status(replacement.id, RoomStatus::Occupied)
                    .await?;

                tracing::info!(
                    reservation_id = reservation.id,
                    from_room = room.id,
                    to_room = replacement.id,
                    "Reservation reassigned before room deletion"
                );
            }
            None => {
                reservation_repo
                    .set_state(reservation.id, ReservationState::Cancelled)
                    .await?;

                tracing::info!(
                    reservation_id = reservation.id,
                    room_id = room.id,
                    "No replacement room found, reservation cancelled"
                );
            }
        }

        txn.commit().await?;

        Ok(true)
    }
}

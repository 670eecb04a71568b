//! Room domain models and parameters.

use entity::room::RoomStatus;
use sea_orm::ActiveEnum;

use crate::model::room::{CreateRoomDto, DeleteRoomResultDto, RoomDto};

/// Bookable room of a hotel.
///
/// `status` is a cached hint of whether the room holds an active reservation; the
/// authoritative answer for a date range always comes from the reservation store.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    /// Room type tag (e.g. "doble"), used to find replacements.
    pub tipo: String,
    pub capacity: i32,
    /// Price per night.
    pub price: f64,
    /// Room number, unique within the hotel.
    pub number: String,
    pub status: RoomStatus,
}

impl Room {
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            hotel_id: self.hotel_id,
            tipo: self.tipo,
            capacity: self.capacity,
            price: self.price,
            number: self.number,
            status: self.status.to_value(),
        }
    }

    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            tipo: entity.tipo,
            capacity: entity.capacity,
            price: entity.price,
            number: entity.number,
            status: entity.status,
        }
    }
}

/// Parameters for creating a room. New rooms always start `AVAILABLE`.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub hotel_id: i32,
    pub tipo: String,
    pub capacity: i32,
    pub price: f64,
    pub number: String,
}

impl CreateRoomParams {
    pub fn from_dto(hotel_id: i32, dto: CreateRoomDto) -> Self {
        Self {
            hotel_id,
            tipo: dto.tipo,
            capacity: dto.capacity,
            price: dto.price,
            number: dto.number,
        }
    }
}

/// Result of deleting a room, for caller reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRoomOutcome {
    /// Active reservations that were reassigned or cancelled.
    pub affected_reservations: u64,
}

impl DeleteRoomOutcome {
    pub fn into_dto(self) -> DeleteRoomResultDto {
        DeleteRoomResultDto {
            affected_reservations: self.affected_reservations,
        }
    }
}

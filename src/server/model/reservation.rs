//! Reservation domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::reservation::ReservationState;
use sea_orm::ActiveEnum;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::{error::AppError, util::parse::parse_required_date},
};

/// Booking of a room for the half-open night range `[date_entry, departure_date)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    /// `None` once the booked room has been deleted.
    pub room_id: Option<i32>,
    pub date_entry: NaiveDate,
    pub departure_date: NaiveDate,
    pub state: ReservationState,
    pub extra_service_ids: Vec<i32>,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            user_id: self.user_id,
            room_id: self.room_id,
            date_entry: self.date_entry,
            departure_date: self.departure_date,
            state: self.state.to_value(),
            extra_service_ids: self.extra_service_ids,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model plus its attached extra service ids at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model, extra_service_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            date_entry: entity.date_entry,
            departure_date: entity.departure_date,
            state: entity.state,
            extra_service_ids,
            payment_method: entity.payment_method,
            payment_status: entity.payment_status,
            total_price: entity.total_price,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for booking a room through the availability engine.
#[derive(Debug, Clone)]
pub struct ReserveRoomParams {
    pub user_id: i32,
    pub room_id: i32,
    pub date_entry: NaiveDate,
    pub departure_date: NaiveDate,
    pub extra_service_ids: Vec<i32>,
    pub payment_method: Option<String>,
}

impl ReserveRoomParams {
    /// Converts a booking DTO, parsing both dates.
    ///
    /// # Returns
    /// - `Ok(ReserveRoomParams)` - Both dates present and parseable
    /// - `Err(AppError::BookingErr(Validation))` - A date is missing or malformed
    pub fn from_dto(user_id: i32, dto: CreateReservationDto) -> Result<Self, AppError> {
        let date_entry = parse_required_date("date_entry", dto.date_entry.as_deref())?;
        let departure_date = parse_required_date("departure_date", dto.departure_date.as_deref())?;

        Ok(Self {
            user_id,
            room_id: dto.room_id,
            date_entry,
            departure_date,
            extra_service_ids: dto.extra_service_ids,
            payment_method: dto.payment_method,
        })
    }
}

/// Row-level data written when a reservation is persisted.
#[derive(Debug, Clone)]
pub struct CreateReservationRecord {
    pub user_id: i32,
    pub room_id: i32,
    pub date_entry: NaiveDate,
    pub departure_date: NaiveDate,
    pub extra_service_ids: Vec<i32>,
    pub payment_method: Option<String>,
    pub total_price: f64,
}

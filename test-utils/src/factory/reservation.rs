//! Reservation factory for creating test reservation entities.
//!
//! Reservations created here bypass the availability engine entirely, which makes the
//! factory suitable for arranging pre-existing (including deliberately inconsistent)
//! booking state.

use crate::factory::helpers::days_from_today;
use chrono::{NaiveDate, Utc};
use entity::reservation::ReservationState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    date_entry: NaiveDate,
    departure_date: NaiveDate,
    state: ReservationState,
    total_price: f64,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - date_entry: 10 days from today
    /// - departure_date: 13 days from today
    /// - state: `active`
    /// - total_price: `300.0`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        Self {
            db,
            user_id,
            room_id,
            date_entry: days_from_today(10),
            departure_date: days_from_today(13),
            state: ReservationState::Active,
            total_price: 300.0,
        }
    }

    /// Sets the stay range `[date_entry, departure_date)`.
    pub fn dates(mut self, date_entry: NaiveDate, departure_date: NaiveDate) -> Self {
        self.date_entry = date_entry;
        self.departure_date = departure_date;
        self
    }

    /// Sets the lifecycle state.
    pub fn state(mut self, state: ReservationState) -> Self {
        self.state = state;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(Some(self.room_id)),
            date_entry: ActiveValue::Set(self.date_entry),
            departure_date: ActiveValue::Set(self.departure_date),
            state: ActiveValue::Set(self.state),
            payment_method: ActiveValue::Set(None),
            payment_status: ActiveValue::Set("pending".to_string()),
            total_price: ActiveValue::Set(self.total_price),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reservation with default dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, room_id).build().await
}

//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns the date `days` days after today (UTC).
///
/// Tests that depend on "today" semantics build their ranges relative to this.
pub fn days_from_today(days: u64) -> NaiveDate {
    let today = Utc::now().date_naive();
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

/// Creates a hotel with a single default room.
///
/// # Returns
/// - `Ok((hotel, room))` - The created hotel and its room
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_hotel(
    db: &DatabaseConnection,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((hotel, room))
}

/// Creates a user, a hotel with one room, and an active reservation on that room.
///
/// The room is marked `OCCUPIED` to mirror what the booking flow leaves behind.
///
/// # Arguments
/// - `db` - Database connection
/// - `date_entry` - First night of the stay
/// - `departure_date` - Departure day (exclusive)
///
/// # Returns
/// - `Ok((user, hotel, room, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
    date_entry: NaiveDate,
    departure_date: NaiveDate,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::RoomFactory::new(db, hotel.id)
        .status(entity::room::RoomStatus::Occupied)
        .build()
        .await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date_entry, departure_date)
        .build()
        .await?;

    Ok((user, hotel, room, reservation))
}

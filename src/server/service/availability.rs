//! Room occupancy control points shared by the availability engine.
//!
//! The room status column is a cache of "this room has an active reservation in the
//! relevant window". Every reservation state change funnels through
//! [`recompute_room_status`] so the rule lives in one place.

use chrono::NaiveDate;
use entity::room::RoomStatus;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    model::availability::{OccupancyWindow, RoomReleasePolicy},
};

/// Re-derives and stores a room's status from the reservation store.
///
/// The room becomes `OCCUPIED` iff an active reservation on it intersects `window`,
/// otherwise `AVAILABLE`.
///
/// # Arguments
/// - `db` - Connection or open transaction the read and write run on
/// - `room_id` - Room to recompute
/// - `window` - Occupancy window to evaluate
///
/// # Returns
/// - `Ok(RoomStatus)` - The status written
/// - `Err(DbErr)` - Database error during the scan or update
pub async fn recompute_room_status<C: ConnectionTrait>(
    db: &C,
    room_id: i32,
    window: OccupancyWindow,
) -> Result<RoomStatus, DbErr> {
    let occupied = ReservationRepository::new(db)
        .has_active_in_window(room_id, window)
        .await?;

    let status = if occupied {
        RoomStatus::Occupied
    } else {
        RoomStatus::Available
    };

    RoomRepository::new(db).set_status(room_id, status).await?;

    Ok(status)
}

/// Re-derives a room's status after one of its reservations was cancelled.
pub async fn release_after_cancel<C: ConnectionTrait>(
    db: &C,
    room_id: i32,
    departure_date: NaiveDate,
    policy: RoomReleasePolicy,
    today: NaiveDate,
) -> Result<RoomStatus, DbErr> {
    let window = policy.cancellation_window(today, departure_date);
    let status = recompute_room_status(db, room_id, window).await?;

    tracing::debug!(room_id, ?status, ?policy, "Recomputed room status after cancellation");

    Ok(status)
}

//! Reservation service, the core of the availability engine.
//!
//! Booking and cancelling read the reservation store and write both the reservation and
//! the room status inside one database transaction, so the availability check and the
//! status flip can't interleave with another request's.

use chrono::{NaiveDate, Utc};
use entity::{reservation::ReservationState, room::RoomStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::BTreeSet;

use crate::server::{
    data::{
        extra_service::ExtraServiceRepository, reservation::ReservationRepository,
        room::RoomRepository,
    },
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        availability::{OccupancyWindow, RoomReleasePolicy},
        reservation::{CreateReservationRecord, Reservation, ReserveRoomParams},
        user::Requester,
    },
    service::availability::{recompute_room_status, release_after_cancel},
};

/// Service providing the booking lifecycle of reservations.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    release_policy: RoomReleasePolicy,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService using the default release policy.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReservationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            release_policy: RoomReleasePolicy::default(),
        }
    }

    /// Sets the policy used to re-derive room status after cancellation.
    pub fn with_release_policy(mut self, release_policy: RoomReleasePolicy) -> Self {
        self.release_policy = release_policy;
        self
    }

    /// Books a room for `[date_entry, departure_date)` if it is free.
    ///
    /// Validates the date range and the extra services, scans the room's active
    /// reservations for an overlap, then persists the reservation and marks the room
    /// `OCCUPIED`. The scan is skipped for an `AVAILABLE` room only when the release
    /// policy guarantees such a room holds no active reservation.
    ///
    /// # Arguments
    /// - `params` - Booking request with the user, room, dates and extra services
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The new active reservation
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::BookingErr(Validation))` - Empty or inverted date range, or an
    ///   extra service outside the room's hotel
    /// - `Err(AppError::BookingErr(Conflict))` - Range overlaps an active reservation
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn check_and_reserve(&self, params: ReserveRoomParams) -> Result<Reservation, AppError> {
        if params.date_entry >= params.departure_date {
            return Err(BookingError::validation(
                "departure_date",
                "departure_date must be after date_entry",
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let room_repo = RoomRepository::new(&txn);
        let reservation_repo = ReservationRepository::new(&txn);

        let Some(room) = room_repo.find_by_id(params.room_id).await? else {
            return Err(AppError::NotFound("Room not found".to_string()));
        };

        let requested: BTreeSet<i32> = params.extra_service_ids.iter().copied().collect();
        let requested: Vec<i32> = requested.into_iter().collect();
        let extra_services = ExtraServiceRepository::new(&txn)
            .find_in_hotel(&requested, room.hotel_id)
            .await?;
        if extra_services.len() != requested.len() {
            return Err(BookingError::validation(
                "extra_service_ids",
                "extra services must exist and belong to the room's hotel",
            )
            .into());
        }

        let must_scan = room.status == RoomStatus::Occupied
            || !self.release_policy.trusts_available_status();
        if must_scan
            && reservation_repo
                .has_active_overlap(room.id, params.date_entry, params.departure_date, None)
                .await?
        {
            return Err(BookingError::Conflict(
                "room unavailable for requested dates".to_string(),
            )
            .into());
        }

        let nights = (params.departure_date - params.date_entry).num_days() as f64;
        let total_price =
            nights * room.price + extra_services.iter().map(|s| s.price).sum::<f64>();

        let reservation = reservation_repo
            .create(CreateReservationRecord {
                user_id: params.user_id,
                room_id: room.id,
                date_entry: params.date_entry,
                departure_date: params.departure_date,
                extra_service_ids: requested,
                payment_method: params.payment_method,
                total_price,
            })
            .await?;

        room_repo.set_status(room.id, RoomStatus::Occupied).await?;

        txn.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            room_id = room.id,
            user_id = params.user_id,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Cancels an active reservation and re-derives the room's status.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation to cancel
    /// - `requester` - Caller; must own the reservation or be an admin
    ///
    /// # Returns
    /// - `Ok(())` - Reservation cancelled
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Requester neither owns it nor is admin
    /// - `Err(AppError::BookingErr(InvalidState))` - Reservation is not active
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn cancel(&self, reservation_id: i32, requester: Requester) -> Result<(), AppError> {
        self.cancel_on(reservation_id, requester, Utc::now().date_naive())
            .await
    }

    /// Cancels a reservation treating `today` as the current date.
    pub async fn cancel_on(
        &self,
        reservation_id: i32,
        requester: Requester,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        if !requester.can_access(reservation.user_id) {
            return Err(AuthError::AccessDenied(
                requester.user_id,
                format!("attempted to cancel reservation {reservation_id} of another user"),
            )
            .into());
        }

        if reservation.state != ReservationState::Active {
            return Err(BookingError::InvalidState(
                "only active reservations can be cancelled".to_string(),
            )
            .into());
        }

        reservation_repo
            .set_state(reservation.id, ReservationState::Cancelled)
            .await?;

        if let Some(room_id) = reservation.room_id {
            release_after_cancel(
                &txn,
                room_id,
                reservation.departure_date,
                self.release_policy,
                today,
            )
            .await?;
        }

        txn.commit().await?;

        tracing::info!(reservation_id, "Reservation cancelled");

        Ok(())
    }

    /// Gets a reservation visible to the requester.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation owned by the requester (or requester is admin)
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Requester may not view it
    pub async fn get_by_id(
        &self,
        reservation_id: i32,
        requester: Requester,
    ) -> Result<Reservation, AppError> {
        let Some(reservation) = ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
        else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        if !requester.can_access(reservation.user_id) {
            return Err(AuthError::AccessDenied(
                requester.user_id,
                format!("attempted to view reservation {reservation_id} of another user"),
            )
            .into());
        }

        Ok(reservation)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(reservations)
    }

    /// Finishes active reservations whose departure date has been reached.
    ///
    /// Marks every active reservation with `departure_date <= today` as finished, then
    /// re-derives the status of each touched room over `[today, ∞)`.
    ///
    /// # Arguments
    /// - `today` - Current date
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reservations finished
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn finish_elapsed(&self, today: NaiveDate) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let elapsed = reservation_repo.get_elapsed_active(today).await?;
        if elapsed.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i32> = elapsed.iter().map(|r| r.id).collect();
        let room_ids: BTreeSet<i32> = elapsed.iter().filter_map(|r| r.room_id).collect();

        let finished = reservation_repo
            .set_state_many(&ids, ReservationState::Finished)
            .await?;

        for room_id in room_ids {
            recompute_room_status(&txn, room_id, OccupancyWindow::from(today)).await?;
        }

        txn.commit().await?;

        Ok(finished)
    }
}

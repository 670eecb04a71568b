use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{Reservation, ReserveRoomParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// POST /api/reservations - Book a room
///
/// The reservation is created for the logged in user.
///
/// # Returns
/// - `201 Created`: The new ReservationDto
/// - `400 Bad Request`: Invalid dates or extra services, or the room is already booked
///   for an overlapping range
/// - `404 Not Found`: No such room
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = ReserveRoomParams::from_dto(user.id, payload)?;
    let reservation = ReservationService::new(&state.db)
        .with_release_policy(state.release_policy)
        .check_and_reserve(params)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// GET /api/reservations - List the logged in user's reservations
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations: Vec<ReservationDto> = ReservationService::new(&state.db)
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// GET /api/reservations/{reservation_id} - Get a reservation
///
/// # Authentication
/// Owner or admin
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .get_by_id(reservation_id, user.as_requester())
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// POST /api/reservations/{reservation_id}/cancel - Cancel a reservation
///
/// # Authentication
/// Owner or admin
///
/// # Returns
/// - `204 No Content`: Reservation cancelled
/// - `400 Bad Request`: Reservation is not active
/// - `403 Forbidden`: Requester neither owns it nor is an admin
/// - `404 Not Found`: No such reservation
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReservationService::new(&state.db)
        .with_release_policy(state.release_policy)
        .cancel(reservation_id, user.as_requester())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::PaginationParams, hotel::CreateHotelDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hotel::CreateHotelParams,
        service::hotel::HotelService,
        state::AppState,
    },
};

/// POST /api/hotels - Create a hotel
///
/// # Access Control
/// - `Admin` - Only admins can create hotels
///
/// # Returns
/// - `201 Created`: The new HotelDto
/// - `401 Unauthorized` / `403 Forbidden`: Not logged in or not an admin
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let hotel = HotelService::new(&state.db)
        .create(CreateHotelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(hotel.into_dto())))
}

/// GET /api/hotels?page=&entries= - List hotels
///
/// # Returns
/// - `200 OK`: PaginatedHotelsDto
pub async fn get_hotels(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotels = HotelService::new(&state.db)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(hotels.into_dto())))
}

/// GET /api/hotels/{hotel_id} - Get a hotel
///
/// # Returns
/// - `200 OK`: HotelDto
/// - `404 Not Found`: No such hotel
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotel = HotelService::new(&state.db)
        .get(hotel_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// DELETE /api/hotels/{hotel_id} - Delete a hotel
///
/// Cancels every active reservation in the hotel, then removes its rooms, extra
/// services and the hotel itself.
///
/// # Access Control
/// - `Admin` - Only admins can delete hotels
///
/// # Returns
/// - `204 No Content`: Hotel deleted
/// - `404 Not Found`: No such hotel
pub async fn delete_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db).delete(hotel_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

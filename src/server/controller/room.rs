use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::room::{CreateRoomDto, RoomDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{CreateRoomParams, Room},
        service::room::RoomService,
        state::AppState,
    },
};

/// POST /api/hotels/{hotel_id}/rooms - Create a room
///
/// New rooms always start `AVAILABLE`.
///
/// # Access Control
/// - `Admin` - Only admins can create rooms
///
/// # Returns
/// - `201 Created`: The new RoomDto
/// - `400 Bad Request`: Room number already used in the hotel
/// - `404 Not Found`: No such hotel
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams::from_dto(hotel_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// GET /api/hotels/{hotel_id}/rooms - List rooms of a hotel
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rooms: Vec<RoomDto> = RoomService::new(&state.db)
        .get_by_hotel(hotel_id)
        .await?
        .into_iter()
        .map(Room::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}

/// GET /api/rooms/{room_id} - Get a room
pub async fn get_room_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let room = RoomService::new(&state.db)
        .get(room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// DELETE /api/rooms/{room_id} - Delete a room
///
/// Active reservations on the room are moved to an equivalent free room of the same
/// hotel, or cancelled when none is free.
///
/// # Access Control
/// - `Admin` - Only admins can delete rooms
///
/// # Returns
/// - `200 OK`: DeleteRoomResultDto with the number of affected reservations
/// - `404 Not Found`: No such room
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcome = RoomService::new(&state.db).delete(room_id).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

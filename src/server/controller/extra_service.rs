use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::extra_service::{CreateExtraServiceDto, ExtraServiceDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::extra_service::{CreateExtraServiceParams, ExtraService},
        service::extra_service::ExtraServiceService,
        state::AppState,
    },
};

/// POST /api/hotels/{hotel_id}/services - Create an extra service for a hotel
///
/// # Access Control
/// - `Admin` - Only admins can create extra services
pub async fn create_extra_service(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<CreateExtraServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ExtraServiceService::new(&state.db)
        .create(CreateExtraServiceParams::from_dto(hotel_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

/// GET /api/hotels/{hotel_id}/services - List extra services of a hotel
pub async fn get_hotel_extra_services(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let services: Vec<ExtraServiceDto> = ExtraServiceService::new(&state.db)
        .get_by_hotel(hotel_id)
        .await?
        .into_iter()
        .map(ExtraService::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(services)))
}

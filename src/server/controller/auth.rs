use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::LoginDto,
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::user::UserService,
        state::AppState,
    },
};

/// POST /api/auth/login - Start a session for a registered user
///
/// Looks the user up by email and stores their ID in the session. Verifying the user's
/// credentials happens upstream of this service.
///
/// # Returns
/// - `200 OK`: The logged in user as UserDto
/// - `401 Unauthorized`: No user registered with that email
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).login(&payload.email).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// GET /api/auth/user - Get the logged in user
///
/// # Returns
/// - `200 OK`: UserDto of the session's user
/// - `401 Unauthorized`: Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::user::CreateUserDto,
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// POST /api/users - Register a new user
///
/// Public endpoint. Registered users are never admins.
///
/// # Returns
/// - `201 Created`: The new UserDto
/// - `400 Bad Request`: Invalid input or email already registered
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// DELETE /api/users/{user_id} - Delete a user account
///
/// Cancels the user's active reservations, freeing their rooms, then removes the
/// account. Deleting your own account also ends your session.
///
/// # Authentication
/// Requires login; only the user themself or an admin may delete the account
///
/// # Returns
/// - `204 No Content`: Account deleted
/// - `403 Forbidden`: Requester is neither the user nor an admin
/// - `404 Not Found`: No such user
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .with_release_policy(state.release_policy)
        .delete(user_id, requester.as_requester())
        .await?;

    if requester.id == user_id {
        AuthSession::new(&session).clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

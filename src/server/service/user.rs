//! User service for business logic.
//!
//! This module provides the `UserService` for registration, lookup and account deletion.
//! Deleting an account releases the rooms held by the user's active reservations before
//! the user record and its reservations are removed.

use chrono::{NaiveDate, Utc};
use entity::reservation::ReservationState;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, user::UserRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        availability::RoomReleasePolicy,
        user::{CreateUserParams, Requester, User},
    },
    service::availability::release_after_cancel,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    release_policy: RoomReleasePolicy,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            release_policy: RoomReleasePolicy::default(),
        }
    }

    /// Sets the policy used to re-derive room status when reservations are cancelled.
    pub fn with_release_policy(mut self, release_policy: RoomReleasePolicy) -> Self {
        self.release_policy = release_policy;
        self
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Name, email and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BookingErr(Validation))` - Blank name or malformed email
    /// - `Err(AppError::BookingErr(Conflict))` - Email already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        if params.name.trim().is_empty() {
            return Err(BookingError::validation("name", "name is required").into());
        }
        if !params.email.contains('@') {
            return Err(BookingError::validation("email", "email is not valid").into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&params.email).await? {
            return Err(BookingError::Conflict("email already registered".to_string()).into());
        }

        let user = user_repo.create(params).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user)
    }

    /// Resolves the user logging in with `email`.
    ///
    /// # Returns
    /// - `Ok(User)` - A user is registered with that email
    /// - `Err(AppError::AuthErr(UnknownEmail))` - No such user
    pub async fn login(&self, email: &str) -> Result<User, AppError> {
        match UserRepository::new(self.db).find_by_email(email).await? {
            Some(user) => Ok(user),
            None => Err(AuthError::UnknownEmail(email.to_string()).into()),
        }
    }

    /// Deletes a user account.
    ///
    /// # Arguments
    /// - `user_id` - Account to delete
    /// - `requester` - Caller; must be the user themself or an admin
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Requester is neither the user nor admin
    pub async fn delete(&self, user_id: i32, requester: Requester) -> Result<(), AppError> {
        self.delete_on(user_id, requester, Utc::now().date_naive())
            .await
    }

    /// Deletes a user account treating `today` as the current date.
    ///
    /// Each active reservation is cancelled and its room re-derived in its own
    /// transaction before the user record is removed.
    pub async fn delete_on(
        &self,
        user_id: i32,
        requester: Requester,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !requester.can_access(user.id) {
            return Err(AuthError::AccessDenied(
                requester.user_id,
                format!("attempted to delete user {}", user.id),
            )
            .into());
        }

        let active = ReservationRepository::new(self.db)
            .get_active_by_user(user.id)
            .await?;

        for reservation in &active {
            let txn = self.db.begin().await?;

            ReservationRepository::new(&txn)
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
        }

        user_repo.delete(user.id).await?;

        tracing::info!(
            user_id = user.id,
            cancelled = active.len(),
            "User deleted"
        );

        Ok(())
    }
}

//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UserDto};

/// Registered guest or administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    /// Identity of this user as the caller of an ownership-checked operation.
    pub fn as_requester(&self) -> Requester {
        Requester {
            user_id: self.id,
            is_admin: self.admin,
        }
    }
}

/// Caller identity passed to operations that enforce ownership.
///
/// Admins are privileged and may act on any user's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: i32,
    pub is_admin: bool,
}

impl Requester {
    /// Returns true if the requester owns the resource or is privileged.
    pub fn can_access(&self, owner_id: i32) -> bool {
        self.is_admin || self.user_id == owner_id
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Admin flag; never taken from public registration input.
    pub admin: bool,
}

impl CreateUserParams {
    /// Converts a registration DTO into parameters for a regular (non-admin) user.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            admin: false,
        }
    }
}

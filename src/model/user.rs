//! User domain model and parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Platform account with local credentials and an optional linked Discord identity.
///
/// The stored password hash stays behind the repository boundary; this model
/// carries everything else about the account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub email: String,
    /// Display name shown on review cards and the success page.
    pub name: String,
    /// Whether the user can manage the lesson catalog and review submissions.
    pub is_admin: bool,
    /// Discord ID of the linked external account, if any.
    pub discord_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            name: entity.name,
            is_admin: entity.is_admin,
            discord_id: entity.discord_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
            is_admin: self.is_admin,
            discord_id: self.discord_id,
            created_at: self.created_at,
        }
    }
}

/// User representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub discord_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a user at signup.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub name: String,
    /// Argon2id PHC string, hashed before the parameter is constructed.
    pub password_hash: String,
}

/// Raw signup request, password not yet hashed.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

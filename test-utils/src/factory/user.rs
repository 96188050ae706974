//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder PHC string stored for factory users.
///
/// Credential checks in tests that need a real hash should create accounts
/// through the signup service instead of the factory.
const FACTORY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$factoryuser$notarealhash";

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("fakeUser")
///     .discord_id("123456789")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    name: String,
    admin: bool,
    discord_id: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - admin: `false`
    /// - discord_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            admin: false,
            discord_id: None,
        }
    }

    /// Sets the username for the user.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email for the user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the user.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the admin status for the user.
    ///
    /// # Arguments
    /// - `admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the linked Discord ID for the user.
    ///
    /// # Arguments
    /// - `discord_id` - External Discord account id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = Some(discord_id.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(FACTORY_PASSWORD_HASH.to_string()),
            is_admin: ActiveValue::Set(self.admin),
            discord_id: ActiveValue::Set(self.discord_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a linked Discord account.
///
/// Shorthand for `UserFactory::new(db).discord_id(discord_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_id` - External Discord account id to link
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_discord_id(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).discord_id(discord_id).build().await
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by the various identity keys, and Discord
//! linking, with conversion between entity models and domain models at the
//! infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// # Arguments
    /// - `param` - Username, email, display name, and pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error during insert, including
    ///   unique constraint violations on username or email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            is_admin: ActiveValue::Set(false),
            discord_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their internal id.
    ///
    /// # Arguments
    /// - `user_id` - Internal user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user row by username.
    ///
    /// Returns the full entity rather than the domain model because the
    /// credential check needs the stored password hash.
    ///
    /// # Arguments
    /// - `username` - Login name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Matching user row
    /// - `Ok(None)` - No user with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Finds the first user linked to the given Discord ID.
    ///
    /// This is the lookup behind the anonymous-arrival sign-in path: the match
    /// is on the stored linked provider id, not on any asserted local id.
    ///
    /// # Arguments
    /// - `discord_id` - External Discord account id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user has linked that Discord account
    /// - `Ok(None)` - No user linked to that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username or email is already taken.
    ///
    /// # Arguments
    /// - `username` - Candidate login name
    /// - `email` - Candidate email address
    ///
    /// # Returns
    /// - `Ok(true)` - Another account already uses the username or email
    /// - `Ok(false)` - Both are free
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(
                entity::user::Column::Username
                    .eq(username)
                    .or(entity::user::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records the linked Discord ID on a user.
    ///
    /// # Arguments
    /// - `user_id` - Internal user id
    /// - `discord_id` - External Discord account id to link
    ///
    /// # Returns
    /// - `Ok(())` - Link recorded (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn link_discord(&self, user_id: i32, discord_id: &str) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::DiscordId,
                sea_orm::sea_query::Expr::value(discord_id),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}

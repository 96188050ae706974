//! Stored provider token repository.
//!
//! Persists the OAuth2 tokens Discord issues for a linked user. The table is
//! keyed by user id, so writes go through an atomic upsert and a refresh can
//! never create a second row.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    error::AppError,
    model::token::{ProviderTokens, TokenSet},
};

/// Repository providing database operations for stored provider tokens.
pub struct ProviderTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProviderTokenRepository<'a> {
    /// Creates a new ProviderTokenRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProviderTokenRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the stored tokens for a user.
    ///
    /// Inserts a token row for the user or, when one already exists, overwrites
    /// its access token, refresh token, and expiry in place. Idempotent under
    /// repeated calls with the same user id; the latest call's values win.
    ///
    /// # Arguments
    /// - `user_id` - Internal id of the owning user
    /// - `tokens` - Tokens from a completed exchange or refresh
    ///
    /// # Returns
    /// - `Ok(ProviderTokens)` - The stored token row after the write
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        user_id: i32,
        tokens: &TokenSet,
    ) -> Result<ProviderTokens, AppError> {
        let entity = entity::prelude::ProviderToken::insert(entity::provider_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            access_token: ActiveValue::Set(tokens.access_token.clone()),
            refresh_token: ActiveValue::Set(tokens.refresh_token.clone()),
            expires_at: ActiveValue::Set(tokens.expires_at),
        })
        .on_conflict(
            OnConflict::column(entity::provider_token::Column::UserId)
                .update_columns([
                    entity::provider_token::Column::AccessToken,
                    entity::provider_token::Column::RefreshToken,
                    entity::provider_token::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ProviderTokens::from_entity(entity))
    }

    /// Gets the stored tokens for a user.
    ///
    /// # Arguments
    /// - `user_id` - Internal id of the owning user
    ///
    /// # Returns
    /// - `Ok(Some(ProviderTokens))` - Stored tokens for the user
    /// - `Ok(None)` - The user has never linked a provider account
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, user_id: i32) -> Result<Option<ProviderTokens>, AppError> {
        let entity = entity::prelude::ProviderToken::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ProviderTokens::from_entity))
    }
}

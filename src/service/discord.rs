//! Discord profile lookups for linked accounts.
//!
//! Backs the post-link success page: loads the stored tokens for a user,
//! refreshes them through the provider when expired, and fetches the profile.

use sea_orm::DatabaseConnection;

use crate::{
    data::provider_token::ProviderTokenRepository, error::AppError,
    model::token::ProviderProfile, service::auth::provider::IdentityProvider,
};

/// Service fetching Discord profile data for linked users.
pub struct DiscordService<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn IdentityProvider,
}

impl<'a> DiscordService<'a> {
    /// Creates a new DiscordService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `provider` - Identity provider client for refresh and profile calls
    ///
    /// # Returns
    /// - `DiscordService` - New service instance
    pub fn new(db: &'a DatabaseConnection, provider: &'a dyn IdentityProvider) -> Self {
        Self { db, provider }
    }

    /// Fetches the Discord profile for a user from their stored tokens.
    ///
    /// When the stored access token has expired, the refresh token is
    /// exchanged first and the new token set is upserted over the old row
    /// before the profile call.
    ///
    /// # Arguments
    /// - `user_id` - Internal id of the user
    ///
    /// # Returns
    /// - `Ok(Some(ProviderProfile))` - Profile of the linked Discord account
    /// - `Ok(None)` - The user never linked a Discord account
    /// - `Err(AppError)` - Refresh, profile fetch, or persistence failure
    pub async fn get_user_info(&self, user_id: i32) -> Result<Option<ProviderProfile>, AppError> {
        let token_repo = ProviderTokenRepository::new(self.db);

        let Some(mut tokens) = token_repo.get(user_id).await? else {
            return Ok(None);
        };

        if tokens.is_expired() {
            tracing::debug!(user_id = tokens.user_id, "refreshing expired Discord tokens");

            let refreshed = self
                .provider
                .exchange_refresh_token(&tokens.refresh_token)
                .await?;
            tokens = token_repo.upsert(user_id, &refreshed).await?;
        }

        let profile = self.provider.fetch_profile(&tokens.access_token).await?;

        Ok(Some(profile))
    }
}

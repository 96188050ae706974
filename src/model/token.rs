//! Provider token models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tokens returned by a provider exchange, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry computed from the provider's `expires_in` at exchange time.
    pub expires_at: DateTime<Utc>,
}

/// Stored provider tokens for a linked user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTokens {
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl ProviderTokens {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::provider_token::Model) -> Self {
        Self {
            user_id: entity.user_id,
            access_token: entity.access_token,
            refresh_token: entity.refresh_token,
            expires_at: entity.expires_at,
        }
    }

    /// Whether the access token has passed its expiry timestamp.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Profile data fetched from the provider for a linked account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    /// The provider-side account id.
    pub provider_id: String,
    pub username: String,
    pub avatar_url: String,
}

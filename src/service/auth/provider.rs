//! Identity provider client for Discord OAuth2.
//!
//! The `IdentityProvider` trait is the seam between the sign-in pipeline and
//! the network: the orchestrator and profile service only see the trait, and
//! tests substitute a recording fake. `DiscordProvider` is the real
//! implementation over the typed OAuth2 client and reqwest.

use async_trait::async_trait;
use chrono::Utc;
use oauth2::basic::BasicTokenType;
use oauth2::{
    AuthorizationCode, CsrfToken, EmptyExtraTokenFields, RefreshToken, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;
use url::Url;

use crate::{
    error::auth::AuthError,
    model::token::{ProviderProfile, TokenSet},
    state::OAuth2Client,
};

const DISCORD_USER_API_URL: &str = "https://discord.com/api/users/@me";
const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

/// Client for the external identity provider.
///
/// All methods are single network calls with no retries; failures propagate
/// immediately to the caller.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges an authorization code for access and refresh tokens.
    async fn exchange_code(&self, code: &str) -> Result<TokenSet, AuthError>;

    /// Exchanges a refresh token for a fresh token set.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenSet, AuthError>;

    /// Fetches the authenticated user's profile with a bearer access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AuthError>;
}

/// Discord implementation of the identity provider.
#[derive(Clone)]
pub struct DiscordProvider {
    oauth_client: OAuth2Client,
    http_client: reqwest::Client,
}

/// Subset of Discord's `users/@me` payload the platform cares about.
#[derive(Deserialize)]
struct DiscordUserPayload {
    id: String,
    username: String,
    avatar: Option<String>,
}

impl DiscordUserPayload {
    /// CDN URL for the user's avatar, falling back to a default embed avatar
    /// when the account has none.
    fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("{}/avatars/{}/{}.png", DISCORD_CDN_URL, self.id, hash),
            None => format!("{}/embed/avatars/0.png", DISCORD_CDN_URL),
        }
    }
}

impl DiscordProvider {
    pub fn new(oauth_client: OAuth2Client, http_client: reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }

    /// Builds the Discord authorize URL together with a fresh CSRF token.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new_random())
            .url();

        (authorize_url, csrf_state)
    }

    /// Converts a token endpoint response into a `TokenSet`.
    ///
    /// A response without `expires_in` is treated as already expired so the
    /// next use goes through a refresh.
    fn token_set(
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<TokenSet, AuthError> {
        let refresh_token = token
            .refresh_token()
            .ok_or_else(|| {
                AuthError::TokenExchange("token response missing refresh token".to_string())
            })?
            .secret()
            .clone();

        let expires_at = token
            .expires_in()
            .and_then(|d| chrono::Duration::from_std(d).ok())
            .map(|d| Utc::now() + d)
            .unwrap_or_else(Utc::now);

        Ok(TokenSet {
            access_token: token.access_token().secret().clone(),
            refresh_token,
            expires_at,
        })
    }
}

#[async_trait]
impl IdentityProvider for DiscordProvider {
    async fn exchange_code(&self, code: &str) -> Result<TokenSet, AuthError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        Self::token_set(&token)
    }

    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenSet, AuthError> {
        let token = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(refresh_token.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        Self::token_set(&token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AuthError> {
        let response = self
            .http_client
            .get(DISCORD_USER_API_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ProfileFetch(format!(
                "Discord API returned {}",
                response.status()
            )));
        }

        let user_info = response
            .json::<DiscordUserPayload>()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        Ok(ProviderProfile {
            avatar_url: user_info.avatar_url(),
            provider_id: user_info.id,
            username: user_info.username,
        })
    }
}

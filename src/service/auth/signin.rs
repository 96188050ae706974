//! Sign-in orchestration.
//!
//! One callback endpoint serves two different authentication entry points:
//! a signed-in user linking Discord to their existing account, and a user
//! arriving via Discord who may or may not be registered. The orchestrator
//! tells them apart by the request's resolved principal and decides the
//! outcome; it performs no session writes itself.

use sea_orm::DatabaseConnection;

use crate::{
    data::{provider_token::ProviderTokenRepository, user::UserRepository},
    error::AppError,
    model::auth::{
        SessionPrincipal, SignInCallback, SignInOutcome, CURRICULUM_PATH, DISCORD_PROVIDER,
        DISCORD_SUCCESS_PATH, DISCORD_USER_NOT_FOUND_PATH,
    },
    service::auth::provider::IdentityProvider,
};

/// Decides the outcome of external-provider sign-in callbacks.
pub struct SignInService<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn IdentityProvider,
}

impl<'a> SignInService<'a> {
    /// Creates a new SignInService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `provider` - Identity provider client for token exchanges
    ///
    /// # Returns
    /// - `SignInService` - New service instance
    pub fn new(db: &'a DatabaseConnection, provider: &'a dyn IdentityProvider) -> Self {
        Self { db, provider }
    }

    /// Runs the sign-in decision for one completed callback.
    ///
    /// - Non-Discord providers continue the local credential flow untouched;
    ///   neither the provider nor the token store is called.
    /// - Discord with a live session links the account: exchange the code,
    ///   fetch the profile the tokens belong to, upsert the tokens for the
    ///   session user, record the Discord id, and redirect to the success
    ///   page.
    /// - Discord without a session looks up the linked account by Discord id:
    ///   a returning user is sent to the curriculum, an unknown one to the
    ///   not-found page. No provider call is made on this path.
    ///
    /// Provider and persistence failures propagate unchanged; the "no linked
    /// user" branch is an outcome, never an error.
    ///
    /// # Arguments
    /// - `callback` - Account and user payload from the completed handshake
    /// - `principal` - The requester's resolved authentication state
    ///
    /// # Returns
    /// - `Ok(SignInOutcome)` - The decision for this attempt
    /// - `Err(AppError)` - Token exchange or persistence failure
    pub async fn sign_in(
        &self,
        callback: &SignInCallback,
        principal: &SessionPrincipal,
    ) -> Result<SignInOutcome, AppError> {
        tracing::debug!(
            provider = %callback.account.provider,
            user_id = %callback.user_id,
            "sign-in callback received"
        );

        if callback.account.provider != DISCORD_PROVIDER {
            return Ok(SignInOutcome::ContinueLocal);
        }

        match principal {
            SessionPrincipal::Authenticated(user) => {
                let tokens = self.provider.exchange_code(&callback.account.code).await?;
                // The profile fetched with the fresh tokens is authoritative
                // for which Discord account gets linked; the callback's
                // asserted id is not trusted here.
                let profile = self.provider.fetch_profile(&tokens.access_token).await?;

                ProviderTokenRepository::new(self.db)
                    .upsert(user.id, &tokens)
                    .await?;
                UserRepository::new(self.db)
                    .link_discord(user.id, &profile.provider_id)
                    .await?;

                Ok(SignInOutcome::ConnectedRedirect(DISCORD_SUCCESS_PATH))
            }
            SessionPrincipal::Anonymous => {
                let linked_user = UserRepository::new(self.db)
                    .find_by_discord_id(&callback.account.external_user_id)
                    .await?;

                match linked_user {
                    Some(_) => Ok(SignInOutcome::ConnectedRedirect(CURRICULUM_PATH)),
                    None => Ok(SignInOutcome::NotFoundRedirect(DISCORD_USER_NOT_FOUND_PATH)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::{
        model::auth::ProviderAccount, model::user::User,
        service::auth::provider::testing::RecordingProvider,
    };

    fn discord_callback(external_user_id: &str) -> SignInCallback {
        SignInCallback {
            account: ProviderAccount {
                provider: "discord".to_string(),
                external_user_id: external_user_id.to_string(),
                code: "fresh-auth-code".to_string(),
            },
            user_id: external_user_id.to_string(),
        }
    }

    /// Tests the default path for username/password logins.
    ///
    /// Verifies that a non-Discord provider continues the local flow without
    /// touching the identity provider or the token store.
    ///
    /// Expected: ContinueLocal, zero provider calls, zero token rows
    #[tokio::test]
    async fn returns_continue_for_non_discord_provider() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::new();

        let callback = SignInCallback {
            account: ProviderAccount {
                provider: "credentials".to_string(),
                external_user_id: String::new(),
                code: String::new(),
            },
            user_id: "123".to_string(),
        };

        let service = SignInService::new(db, &provider);
        let outcome = service
            .sign_in(&callback, &SessionPrincipal::Anonymous)
            .await?;

        assert_eq!(outcome, SignInOutcome::ContinueLocal);
        assert_eq!(provider.exchange_count(), 0);
        assert_eq!(provider.profile_count(), 0);

        let token_rows = entity::prelude::ProviderToken::find().count(db).await?;
        assert_eq!(token_rows, 0);

        Ok(())
    }

    /// Tests linking Discord to an account with a live session.
    ///
    /// Verifies that a Discord callback with an authenticated principal
    /// exchanges the code exactly once, stores the tokens for the session
    /// user, records the Discord id, and redirects to the success page.
    ///
    /// Expected: ConnectedRedirect("/discord/success") with one exchange call
    #[tokio::test]
    async fn connects_discord_when_session_present() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::new();

        let user = factory::user::UserFactory::new(db)
            .username("fakeUser")
            .build()
            .await?;
        let principal = SessionPrincipal::Authenticated(User::from_entity(user.clone()));

        let service = SignInService::new(db, &provider);
        let outcome = service
            .sign_in(&discord_callback("999888777"), &principal)
            .await?;

        assert_eq!(outcome, SignInOutcome::ConnectedRedirect("/discord/success"));
        assert_eq!(provider.exchange_count(), 1);

        let tokens = ProviderTokenRepository::new(db).get(user.id).await?;
        let tokens = tokens.unwrap();
        assert_eq!(tokens.access_token, "issued-access-token");
        assert_eq!(tokens.refresh_token, "issued-refresh-token");

        let linked = UserRepository::new(db).find_by_discord_id("999888777").await?;
        assert_eq!(linked.unwrap().id, user.id);

        Ok(())
    }

    /// Tests a second link attempt overwriting the stored tokens.
    ///
    /// Verifies that repeating the link flow for the same user updates the
    /// existing token row instead of inserting a duplicate.
    ///
    /// Expected: one token row after two link flows
    #[tokio::test]
    async fn relinking_overwrites_tokens_without_duplicating() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::new();

        let user = factory::user::create_user(db).await?;
        let principal = SessionPrincipal::Authenticated(User::from_entity(user.clone()));

        let service = SignInService::new(db, &provider);
        service
            .sign_in(&discord_callback("999888777"), &principal)
            .await?;
        service
            .sign_in(&discord_callback("999888777"), &principal)
            .await?;

        assert_eq!(provider.exchange_count(), 2);

        let token_rows = entity::prelude::ProviderToken::find().count(db).await?;
        assert_eq!(token_rows, 1);

        Ok(())
    }

    /// Tests a returning user arriving via Discord without a session.
    ///
    /// Verifies that when a user already linked the Discord account, the
    /// anonymous arrival is sent to the curriculum without any provider call.
    ///
    /// Expected: ConnectedRedirect("/curriculum"), zero provider calls
    #[tokio::test]
    async fn redirects_returning_linked_user_to_curriculum() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::new();

        factory::user::create_user_with_discord_id(db, "999888777").await?;

        let service = SignInService::new(db, &provider);
        let outcome = service
            .sign_in(&discord_callback("999888777"), &SessionPrincipal::Anonymous)
            .await?;

        assert_eq!(outcome, SignInOutcome::ConnectedRedirect("/curriculum"));
        assert_eq!(provider.exchange_count(), 0);
        assert_eq!(provider.profile_count(), 0);

        Ok(())
    }

    /// Tests an anonymous Discord arrival with no linked account.
    ///
    /// Verifies that the missing-user branch is a normal outcome rather than
    /// an error.
    ///
    /// Expected: NotFoundRedirect("/discord/404user")
    #[tokio::test]
    async fn redirects_unknown_discord_user_to_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::new();

        let service = SignInService::new(db, &provider);
        let outcome = service
            .sign_in(&discord_callback("999888777"), &SessionPrincipal::Anonymous)
            .await?;

        assert_eq!(outcome, SignInOutcome::NotFoundRedirect("/discord/404user"));

        Ok(())
    }

    /// Tests that a failed token exchange propagates to the caller.
    ///
    /// Verifies that the orchestrator does not swallow provider failures and
    /// leaves no partial token state behind.
    ///
    /// Expected: Err with zero token rows
    #[tokio::test]
    async fn propagates_exchange_failure() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let provider = RecordingProvider::failing();

        let user = factory::user::create_user(db).await?;
        let principal = SessionPrincipal::Authenticated(User::from_entity(user));

        let service = SignInService::new(db, &provider);
        let result = service
            .sign_in(&discord_callback("999888777"), &principal)
            .await;

        assert!(result.is_err());

        let token_rows = entity::prelude::ProviderToken::find().count(db).await?;
        assert_eq!(token_rows, 0);

        Ok(())
    }
}

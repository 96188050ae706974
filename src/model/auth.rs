//! Sign-in pipeline models.
//!
//! These types carry a completed external handshake into the sign-in
//! orchestrator and carry its decision back out to the HTTP layer.

use crate::model::user::User;

/// Provider name carried by Discord callbacks.
pub const DISCORD_PROVIDER: &str = "discord";

/// Redirect target after linking Discord to an already signed-in account.
pub const DISCORD_SUCCESS_PATH: &str = "/discord/success";

/// Redirect target for a returning user who already linked Discord.
pub const CURRICULUM_PATH: &str = "/curriculum";

/// Redirect target when no account is linked to the Discord identity.
pub const DISCORD_USER_NOT_FOUND_PATH: &str = "/discord/404user";

/// The requester's authentication state at the time of the callback.
///
/// Modeled as a tagged variant rather than an optional user so the two
/// fundamentally different entry points — "link Discord to my account" and
/// "arrive via Discord, possibly unregistered" — are statically distinct.
#[derive(Debug, Clone)]
pub enum SessionPrincipal {
    /// A live application session exists for this user.
    Authenticated(User),
    /// No application session; the requester is only known to the provider.
    Anonymous,
}

/// External-provider account data from a completed authentication handshake.
#[derive(Debug, Clone)]
pub struct ProviderAccount {
    /// Provider name, e.g. `discord` or `credentials`.
    pub provider: String,
    /// The provider-side account id asserted by the handshake.
    pub external_user_id: String,
    /// Authorization code from the handshake, exchanged when linking.
    pub code: String,
}

/// Callback payload supplied by the OAuth integration layer.
#[derive(Debug, Clone)]
pub struct SignInCallback {
    pub account: ProviderAccount,
    /// The framework-asserted user id for this sign-in attempt. Advisory; the
    /// lookup path matches on the linked provider id instead.
    pub user_id: String,
}

/// Decision produced by one sign-in attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Non-provider login; the local credential flow continues unchanged.
    ContinueLocal,
    /// Provider identity resolved to an account; redirect to the given path.
    ConnectedRedirect(&'static str),
    /// No account is linked to the provider identity; redirect to the given path.
    NotFoundRedirect(&'static str),
}

impl SignInOutcome {
    /// The redirect path carried by this outcome, if any.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::ContinueLocal => None,
            Self::ConnectedRedirect(path) | Self::NotFoundRedirect(path) => Some(path),
        }
    }
}

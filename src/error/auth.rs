use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Exchanging an authorization code (or refresh token) with Discord failed.
    ///
    /// Covers bad or expired codes, network failures, and non-2xx token
    /// endpoint responses. Not retried; surfaced to the caller.
    #[error("Failed to exchange tokens with Discord: {0}")]
    TokenExchange(String),

    /// Fetching the Discord profile after a successful exchange failed.
    ///
    /// Covers network failures, non-2xx responses, and malformed payloads from
    /// the profile endpoint. Not retried; surfaced to the caller.
    #[error("Failed to fetch Discord profile: {0}")]
    ProfileFetch(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No user id present in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Username/password combination did not match an account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user lacks a permission required by the endpoint.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Provider failures map to 502 Bad Gateway, CSRF failures to 400, missing or
/// invalid credentials to 401, missing users to 404, and permission failures
/// to 403. Client-facing messages stay generic; details are logged server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::TokenExchange(_) | Self::ProfileFetch(_) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorDto {
                    error: "There was an issue connecting to Discord, please try again."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

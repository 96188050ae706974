use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash or parse an Argon2 password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A submission row carried a status string outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Unknown submission status '{0}' in database")]
    UnknownSubmissionStatus(String),
}

use serde::{Deserialize, Serialize};

/// Error payload returned to API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

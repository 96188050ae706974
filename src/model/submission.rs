//! Submission domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::internal::InternalError;

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Open,
    UnderReview,
    Passed,
    NeedsRework,
}

impl SubmissionStatus {
    /// The string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::UnderReview => "under_review",
            Self::Passed => "passed",
            Self::NeedsRework => "needs_rework",
        }
    }

    /// Parses the stored string form.
    ///
    /// # Returns
    /// - `Ok(SubmissionStatus)` - Recognized status string
    /// - `Err(InternalError::UnknownSubmissionStatus)` - Value outside the known set
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "open" => Ok(Self::Open),
            "under_review" => Ok(Self::UnderReview),
            "passed" => Ok(Self::Passed),
            "needs_rework" => Ok(Self::NeedsRework),
            other => Err(InternalError::UnknownSubmissionStatus(other.to_string())),
        }
    }

    /// Whether a review has resolved this submission.
    ///
    /// Resolved submissions are excluded from the review queue.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Passed | Self::NeedsRework)
    }
}

/// Challenge submission awaiting or holding a review decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: i32,
    pub lesson_id: i32,
    pub user_id: i32,
    pub status: SubmissionStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Submission)` - Converted domain model
    /// - `Err(InternalError::UnknownSubmissionStatus)` - Stored status string
    ///   outside the known set
    pub fn from_entity(entity: entity::submission::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            user_id: entity.user_id,
            status: SubmissionStatus::parse(&entity.status)?,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the submission domain model to a DTO for API responses.
    pub fn into_dto(self) -> SubmissionDto {
        SubmissionDto {
            id: self.id,
            lesson_id: self.lesson_id,
            user_id: self.user_id,
            status: self.status,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Submission representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: i32,
    pub lesson_id: i32,
    pub user_id: i32,
    pub status: SubmissionStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating a submission.
#[derive(Debug, Clone)]
pub struct CreateSubmissionParam {
    pub lesson_id: i32,
    pub user_id: i32,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_stored_string() {
        for status in [
            SubmissionStatus::Open,
            SubmissionStatus::UnderReview,
            SubmissionStatus::Passed,
            SubmissionStatus::NeedsRework,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_string_is_an_error() {
        assert!(SubmissionStatus::parse("rejected").is_err());
    }

    #[test]
    fn status_serializes_as_stored_string() {
        let json = serde_json::to_string(&SubmissionStatus::NeedsRework).unwrap();

        assert_eq!(json, "\"needs_rework\"");
    }
}

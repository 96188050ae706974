//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let lesson = factory::lesson::create_lesson(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("fakeUser")
//!     .discord_id("987654321")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `lesson` - Create lesson entities
//! - `submission` - Create submission entities
//! - `provider_token` - Create stored OAuth token entities

pub mod helpers;
pub mod lesson;
pub mod provider_token;
pub mod submission;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use lesson::create_lesson;
pub use provider_token::{create_expired_tokens, create_tokens};
pub use submission::{create_submission, create_submission_with_status};
pub use user::{create_user, create_user_with_discord_id};

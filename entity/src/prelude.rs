pub use super::lesson::Entity as Lesson;
pub use super::provider_token::Entity as ProviderToken;
pub use super::submission::Entity as Submission;
pub use super::user::Entity as User;

use crate::{data::user::UserRepository, error::AppError, model::user::CreateUserParam};
use test_utils::builder::TestBuilder;

mod create;
mod find_by_discord_id;
mod find_by_username;
mod link_discord;

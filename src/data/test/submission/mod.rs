use crate::{
    data::submission::SubmissionRepository,
    error::AppError,
    model::submission::{CreateSubmissionParam, SubmissionStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_open_by_lesson;
mod set_status;

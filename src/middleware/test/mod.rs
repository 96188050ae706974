use test_utils::{builder::TestBuilder, factory};

use crate::error::AppError;

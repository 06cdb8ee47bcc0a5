use crate::{data::sorting_user::SortingUserRepository, model::house::House};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;

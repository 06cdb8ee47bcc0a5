use crate::data::afk::AfkRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear;
mod get_many;
mod set;

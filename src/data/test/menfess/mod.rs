use crate::data::menfess::MenfessRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod anon_label;
mod post;

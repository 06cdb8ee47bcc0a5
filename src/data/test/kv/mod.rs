use crate::data::kv::{KvRepository, KvStore};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::builder::TestBuilder;

mod get_text;
mod set_texts;

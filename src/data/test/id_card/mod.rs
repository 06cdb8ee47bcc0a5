use crate::{
    data::id_card::IdCardRepository,
    model::id_card::{CardTheme, UpsertIdCardParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod get_page_newest_first;
mod upsert;

fn param(user_id: u64, name: &str) -> UpsertIdCardParam {
    UpsertIdCardParam {
        user_id,
        name: name.to_string(),
        gender: "cewek".to_string(),
        domicile: "Bandung".to_string(),
        hobby: "Nonton".to_string(),
        status: "single".to_string(),
        theme: CardTheme::Light,
        new_number: "0000000000000001".to_string(),
    }
}

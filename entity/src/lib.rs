//! SeaORM entities for the HOV Assistant database.

pub mod prelude;

pub mod afk_user;
pub mod id_card;
pub mod kv_entry;
pub mod menfess_anon;
pub mod menfess_post;
pub mod sorting_user;

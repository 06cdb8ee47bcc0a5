pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_kv_entry_table;
mod m20260105_000002_create_id_card_table;
mod m20260105_000003_create_sorting_user_table;
mod m20260106_000004_create_afk_user_table;
mod m20260106_000005_create_menfess_post_table;
mod m20260106_000006_create_menfess_anon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_kv_entry_table::Migration),
            Box::new(m20260105_000002_create_id_card_table::Migration),
            Box::new(m20260105_000003_create_sorting_user_table::Migration),
            Box::new(m20260106_000004_create_afk_user_table::Migration),
            Box::new(m20260106_000005_create_menfess_post_table::Migration),
            Box::new(m20260106_000006_create_menfess_anon_table::Migration),
        ]
    }
}

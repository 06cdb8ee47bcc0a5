use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenfessAnon::Table)
                    .if_not_exists()
                    .col(string(MenfessAnon::UserId).primary_key())
                    .col(string_uniq(MenfessAnon::AnonLabel))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenfessAnon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenfessAnon {
    Table,
    UserId,
    AnonLabel,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AfkUser::Table)
                    .if_not_exists()
                    .col(string(AfkUser::UserId).primary_key())
                    .col(string(AfkUser::Reason))
                    .col(timestamp(AfkUser::Since))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AfkUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AfkUser {
    Table,
    UserId,
    Reason,
    Since,
}

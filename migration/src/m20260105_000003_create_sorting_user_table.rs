use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SortingUser::Table)
                    .if_not_exists()
                    .col(string(SortingUser::UserId).primary_key())
                    .col(string(SortingUser::House))
                    .col(timestamp(SortingUser::SortedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SortingUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SortingUser {
    Table,
    UserId,
    House,
    SortedAt,
}

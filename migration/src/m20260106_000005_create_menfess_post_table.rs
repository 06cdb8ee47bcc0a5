use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenfessPost::Table)
                    .if_not_exists()
                    .col(pk_auto(MenfessPost::Id))
                    .col(string(MenfessPost::MessageId))
                    .col(string(MenfessPost::ChannelId))
                    .col(timestamp(MenfessPost::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenfessPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenfessPost {
    Table,
    Id,
    MessageId,
    ChannelId,
    CreatedAt,
}

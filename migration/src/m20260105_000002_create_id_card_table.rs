use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdCard::Table)
                    .if_not_exists()
                    .col(string(IdCard::UserId).primary_key())
                    .col(string(IdCard::Number))
                    .col(string(IdCard::Name))
                    .col(string(IdCard::Gender))
                    .col(string(IdCard::Domicile))
                    .col(string(IdCard::Hobby))
                    .col(string(IdCard::Status))
                    .col(string(IdCard::Theme))
                    .col(timestamp(IdCard::CreatedAt))
                    .col(timestamp(IdCard::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Registry pages are ordered newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_id_card_created_at")
                    .table(IdCard::Table)
                    .col(IdCard::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_id_card_created_at")
                    .table(IdCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IdCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IdCard {
    Table,
    UserId,
    Number,
    Name,
    Gender,
    Domicile,
    Hobby,
    Status,
    Theme,
    CreatedAt,
    UpdatedAt,
}

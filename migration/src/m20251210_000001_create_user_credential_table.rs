use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCredential::Table)
                    .if_not_exists()
                    .col(big_integer(UserCredential::UserId).primary_key())
                    .col(text(UserCredential::EncryptedCredential))
                    .col(
                        timestamp_with_time_zone(UserCredential::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserCredential::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCredential::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserCredential {
    Table,
    UserId,
    EncryptedCredential,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

/// Maximum resin value, used as the default reminder threshold.
const DEFAULT_RESIN_THRESHOLD: i32 = 200;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSetting::Table)
                    .if_not_exists()
                    .col(big_integer(UserSetting::UserId).primary_key())
                    .col(boolean(UserSetting::ResinReminderEnabled).default(false))
                    .col(integer(UserSetting::ResinThreshold).default(DEFAULT_RESIN_THRESHOLD))
                    .col(big_integer_null(UserSetting::NotificationChannelId))
                    .col(string(UserSetting::Timezone).default("UTC"))
                    .col(timestamp_with_time_zone_null(UserSetting::LastNotifiedAt))
                    .col(
                        timestamp_with_time_zone(UserSetting::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserSetting::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_setting_reminder_enabled")
                    .table(UserSetting::Table)
                    .col(UserSetting::ResinReminderEnabled)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserSetting {
    Table,
    UserId,
    ResinReminderEnabled,
    ResinThreshold,
    NotificationChannelId,
    Timezone,
    LastNotifiedAt,
    CreatedAt,
    UpdatedAt,
}

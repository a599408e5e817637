//! Notification setting data repository for database operations.
//!
//! This module provides the `UserSettingRepository` for managing per-user resin
//! reminder settings. Settings rows are created on first write, updated in place
//! with partial updates, and converted to `NotificationSetting` domain models at the
//! repository boundary.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::{
        resin::MAX_RESIN,
        setting::{NotificationSetting, ReminderTarget, UpsertNotificationSettingParam},
    },
    util::parse::{user_id_from_db, user_id_to_db},
};

const DEFAULT_TIMEZONE: &str = "UTC";

/// Repository providing database operations for notification settings.
pub struct UserSettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserSettingRepository<'a, C> {
    /// Creates a new UserSettingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserSettingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or partially updates a user's settings.
    ///
    /// Only the fields provided as `Some` are written on conflict, so a call that sets
    /// only the threshold leaves the enabled flag untouched. When the row does not
    /// exist yet, missing fields take their defaults (disabled, threshold at max
    /// resin, UTC). `updated_at` is refreshed on every call.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `param` - Fields to write
    ///
    /// # Returns
    /// - `Ok(NotificationSetting)` - The created or updated settings
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(
        &self,
        user_id: u64,
        param: UpsertNotificationSettingParam,
    ) -> Result<NotificationSetting, AppError> {
        let mut update_columns = vec![entity::user_setting::Column::UpdatedAt];

        if param.resin_reminder_enabled.is_some() {
            update_columns.push(entity::user_setting::Column::ResinReminderEnabled);
        }
        if param.resin_threshold.is_some() {
            update_columns.push(entity::user_setting::Column::ResinThreshold);
        }
        if param.notification_channel_id.is_some() {
            update_columns.push(entity::user_setting::Column::NotificationChannelId);
        }
        if param.timezone.is_some() {
            update_columns.push(entity::user_setting::Column::Timezone);
        }

        let now = Utc::now();
        let entity = entity::prelude::UserSetting::insert(entity::user_setting::ActiveModel {
            user_id: ActiveValue::Set(user_id_to_db(user_id)?),
            resin_reminder_enabled: ActiveValue::Set(param.resin_reminder_enabled.unwrap_or(false)),
            resin_threshold: ActiveValue::Set(param.resin_threshold.unwrap_or(MAX_RESIN)),
            notification_channel_id: ActiveValue::Set(
                param
                    .notification_channel_id
                    .map(user_id_to_db)
                    .transpose()?,
            ),
            timezone: ActiveValue::Set(
                param
                    .timezone
                    .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            ),
            last_notified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user_setting::Column::UserId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        NotificationSetting::from_entity(entity)
    }

    /// Gets a user's settings.
    ///
    /// # Returns
    /// - `Ok(Some(NotificationSetting))` - Settings row found
    /// - `Ok(None)` - User never configured settings
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_user_id(
        &self,
        user_id: u64,
    ) -> Result<Option<NotificationSetting>, AppError> {
        entity::prelude::UserSetting::find_by_id(user_id_to_db(user_id)?)
            .one(self.db)
            .await?
            .map(NotificationSetting::from_entity)
            .transpose()
    }

    /// Gets every user with the resin reminder enabled, ordered by user ID.
    ///
    /// Rows whose stored ID cannot be a Discord user ID are logged and skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<ReminderTarget>)` - Snapshot of enabled users and their thresholds
    /// - `Err(AppError)` - Database error during query
    pub async fn get_reminder_enabled(&self) -> Result<Vec<ReminderTarget>, AppError> {
        let entities = entity::prelude::UserSetting::find()
            .filter(entity::user_setting::Column::ResinReminderEnabled.eq(true))
            .order_by_asc(entity::user_setting::Column::UserId)
            .all(self.db)
            .await?;

        let targets = entities
            .into_iter()
            .filter_map(|e| match user_id_from_db(e.user_id) {
                Ok(user_id) => Some(ReminderTarget {
                    user_id,
                    threshold: e.resin_threshold,
                }),
                Err(err) => {
                    tracing::warn!("Skipping reminder setting with invalid user id: {}", err);
                    None
                }
            })
            .collect();

        Ok(targets)
    }

    /// Records when the last reminder was delivered to a user.
    ///
    /// Leaves `updated_at` alone since this is not a user-driven change.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp written, or no settings row existed
    /// - `Err(AppError)` - Database error during update
    pub async fn set_last_notified_at(
        &self,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        entity::prelude::UserSetting::update_many()
            .col_expr(
                entity::user_setting::Column::LastNotifiedAt,
                sea_orm::sea_query::Expr::value(Some(at)),
            )
            .filter(entity::user_setting::Column::UserId.eq(user_id_to_db(user_id)?))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user's settings row.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row existed
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::UserSetting::delete_by_id(user_id_to_db(user_id)?)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Notification setting factory for creating test setting rows.

use crate::factory::helpers::next_user_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating setting rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_setting::UserSettingFactory;
///
/// let setting = UserSettingFactory::new(&db)
///     .user_id(42)
///     .enabled(true)
///     .threshold(180)
///     .build()
///     .await?;
/// ```
pub struct UserSettingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    enabled: bool,
    threshold: i32,
}

impl<'a> UserSettingFactory<'a> {
    /// Creates a new UserSettingFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique id
    /// - enabled: `false`
    /// - threshold: `200`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_user_id(),
            enabled: false,
            threshold: 200,
        }
    }

    /// Sets the user id for the row.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets whether the resin reminder is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the stored threshold. Zero is allowed to simulate legacy rows.
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builds and inserts the setting row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_setting::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_setting::Model, DbErr> {
        let now = Utc::now();
        entity::user_setting::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            resin_reminder_enabled: ActiveValue::Set(self.enabled),
            resin_threshold: ActiveValue::Set(self.threshold),
            notification_channel_id: ActiveValue::Set(None),
            timezone: ActiveValue::Set("UTC".to_string()),
            last_notified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a setting row with default values.
///
/// Shorthand for `UserSettingFactory::new(db).build().await`.
pub async fn create_user_setting(
    db: &DatabaseConnection,
) -> Result<entity::user_setting::Model, DbErr> {
    UserSettingFactory::new(db).build().await
}

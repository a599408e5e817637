//! Domain models for per-user resin reminder settings.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::user_id_from_db};

/// Stored reminder settings for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSetting {
    /// Discord user ID.
    pub user_id: u64,
    /// Whether the periodic resin reminder is enabled.
    pub resin_reminder_enabled: bool,
    /// Resin value at or above which a reminder is sent.
    pub resin_threshold: i32,
    /// Reserved for channel delivery; reminders currently go to the user's DMs.
    pub notification_channel_id: Option<u64>,
    pub timezone: String,
    /// When the last reminder was delivered. Informational only.
    pub last_notified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationSetting {
    /// Converts an entity model to a setting domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(NotificationSetting)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored ID is negative
    pub fn from_entity(entity: entity::user_setting::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: user_id_from_db(entity.user_id)?,
            resin_reminder_enabled: entity.resin_reminder_enabled,
            resin_threshold: entity.resin_threshold,
            notification_channel_id: entity
                .notification_channel_id
                .map(user_id_from_db)
                .transpose()?,
            timezone: entity.timezone,
            last_notified_at: entity.last_notified_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Partial update of a user's settings.
///
/// Each `Some` field is written; `None` fields keep their stored value, or take the
/// column default when the row is created by this call.
#[derive(Debug, Clone, Default)]
pub struct UpsertNotificationSettingParam {
    pub resin_reminder_enabled: Option<bool>,
    pub resin_threshold: Option<i32>,
    pub notification_channel_id: Option<u64>,
    pub timezone: Option<String>,
}

/// One entry of the reminder sweep snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTarget {
    pub user_id: u64,
    pub threshold: i32,
}

/// Which rows a full data deletion removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedUserData {
    pub credential: bool,
    pub settings: bool,
}

impl DeletedUserData {
    /// Whether anything was removed at all.
    pub fn any(&self) -> bool {
        self.credential || self.settings
    }
}

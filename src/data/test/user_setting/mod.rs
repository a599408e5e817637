use crate::{
    data::user_setting::UserSettingRepository, error::AppError,
    model::setting::UpsertNotificationSettingParam,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_reminder_enabled;
mod set_last_notified_at;
mod upsert;

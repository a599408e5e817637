//! Encrypted per-user credential store.
//!
//! `CredentialStore` is the only component that touches the user tables. It
//! serializes credential bundles, encrypts them with the process-wide key, and hands
//! ciphertext to the repositories; settings pass through with validation. One
//! instance is constructed at startup and cloned into the bot and the sweeper.
//!
//! Reads return `Result<Option<_>>`: `Ok(None)` means the user never configured
//! anything, while `Err` means the stored data could not be read. Callers decide how
//! to treat the failure; the sweeper skips the user, interactive commands tell the user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    crypto::CredentialCipher,
    data::{user_credential::UserCredentialRepository, user_setting::UserSettingRepository},
    error::AppError,
    model::{
        credential::CredentialBundle,
        resin::MAX_RESIN,
        setting::{
            DeletedUserData, NotificationSetting, ReminderTarget, UpsertNotificationSettingParam,
        },
    },
};

#[derive(Clone)]
pub struct CredentialStore {
    db: DatabaseConnection,
    cipher: Arc<CredentialCipher>,
}

impl CredentialStore {
    /// Creates a new CredentialStore.
    ///
    /// # Arguments
    /// - `db` - Connection pool; each operation checks out a connection for one call
    /// - `cipher` - Cipher bound to the process-wide key
    ///
    /// # Returns
    /// - `CredentialStore` - New store instance
    pub fn new(db: DatabaseConnection, cipher: CredentialCipher) -> Self {
        Self {
            db,
            cipher: Arc::new(cipher),
        }
    }

    /// Serializes, encrypts, and upserts a user's credential bundle.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `bundle` - Secret bundle to store
    ///
    /// # Returns
    /// - `Ok(())` - Credential stored, replacing any previous one
    /// - `Err(AppError)` - Serialization, encryption, or database failure
    pub async fn save_credential(
        &self,
        user_id: u64,
        bundle: &CredentialBundle,
    ) -> Result<(), AppError> {
        let plaintext = serde_json::to_vec(bundle)?;
        let encrypted = self.cipher.encrypt(&plaintext)?;

        UserCredentialRepository::new(&self.db)
            .upsert(user_id, encrypted)
            .await
    }

    /// Reads and decrypts a user's credential bundle.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(CredentialBundle))` - Stored credential
    /// - `Ok(None)` - User has not configured a credential
    /// - `Err(AppError)` - Row exists but could not be decrypted or parsed, or the
    ///   database failed
    pub async fn get_credential(&self, user_id: u64) -> Result<Option<CredentialBundle>, AppError> {
        let Some(encrypted) = UserCredentialRepository::new(&self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(None);
        };

        let bundle: Result<CredentialBundle, AppError> = self
            .cipher
            .decrypt(&encrypted)
            .map_err(AppError::from)
            .and_then(|plaintext| Ok(serde_json::from_slice(&plaintext)?));

        match bundle {
            Ok(bundle) => Ok(Some(bundle)),
            Err(e) => {
                tracing::warn!("Stored credential for user {} is unreadable: {}", user_id, e);
                Err(e)
            }
        }
    }

    /// Deletes a user's credential, leaving settings in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Credential removed
    /// - `Ok(false)` - No credential was stored
    /// - `Err(AppError)` - Database failure
    pub async fn delete_credential(&self, user_id: u64) -> Result<bool, AppError> {
        UserCredentialRepository::new(&self.db).delete(user_id).await
    }

    /// Creates or partially updates a user's notification settings.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `param` - Fields to write; `None` fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(NotificationSetting)` - Settings after the write
    /// - `Err(AppError::BadRequest)` - Threshold outside `1..=200`
    /// - `Err(AppError)` - Database failure
    pub async fn save_settings(
        &self,
        user_id: u64,
        param: UpsertNotificationSettingParam,
    ) -> Result<NotificationSetting, AppError> {
        if let Some(threshold) = param.resin_threshold {
            if !(1..=MAX_RESIN).contains(&threshold) {
                return Err(AppError::BadRequest(format!(
                    "The threshold must be between 1 and {MAX_RESIN}."
                )));
            }
        }

        UserSettingRepository::new(&self.db)
            .upsert(user_id, param)
            .await
    }

    /// Gets a user's notification settings.
    ///
    /// # Returns
    /// - `Ok(Some(NotificationSetting))` - Stored settings
    /// - `Ok(None)` - User never saved settings
    /// - `Err(AppError)` - Database failure
    pub async fn get_settings(&self, user_id: u64) -> Result<Option<NotificationSetting>, AppError> {
        UserSettingRepository::new(&self.db)
            .find_by_user_id(user_id)
            .await
    }

    /// Gets the snapshot of users the reminder sweep should check.
    pub async fn list_users_with_reminder_enabled(&self) -> Result<Vec<ReminderTarget>, AppError> {
        UserSettingRepository::new(&self.db)
            .get_reminder_enabled()
            .await
    }

    /// Records a delivered reminder.
    pub async fn record_notification(
        &self,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        UserSettingRepository::new(&self.db)
            .set_last_notified_at(user_id, at)
            .await
    }

    /// Deletes every row stored for a user.
    ///
    /// Both deletes run in one transaction, so a database failure leaves the user's
    /// data as it was. A user with only one of the two rows still succeeds; the report
    /// says which rows existed.
    ///
    /// # Returns
    /// - `Ok(DeletedUserData)` - Which rows were removed
    /// - `Err(AppError)` - Database failure; nothing was removed
    pub async fn delete_all_user_data(&self, user_id: u64) -> Result<DeletedUserData, AppError> {
        let txn = self.db.begin().await?;

        let credential = UserCredentialRepository::new(&txn).delete(user_id).await?;
        let settings = UserSettingRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        Ok(DeletedUserData {
            credential,
            settings,
        })
    }
}

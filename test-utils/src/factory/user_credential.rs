//! Credential factory for seeding raw credential rows.
//!
//! The factory writes the stored column verbatim. It does not encrypt anything, which
//! makes it useful for simulating rows written under a different key or corrupted on
//! disk.

use crate::factory::helpers::next_user_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating credential rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_credential::UserCredentialFactory;
///
/// let row = UserCredentialFactory::new(&db)
///     .user_id(42)
///     .encrypted_credential("not-base64")
///     .build()
///     .await?;
/// ```
pub struct UserCredentialFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    encrypted_credential: String,
}

impl<'a> UserCredentialFactory<'a> {
    /// Creates a new UserCredentialFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique id
    /// - encrypted_credential: `"corrupted"` (never decrypts)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_user_id(),
            encrypted_credential: "corrupted".to_string(),
        }
    }

    /// Sets the user id for the row.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the stored ciphertext column verbatim.
    pub fn encrypted_credential(mut self, value: impl Into<String>) -> Self {
        self.encrypted_credential = value.into();
        self
    }

    /// Builds and inserts the credential row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_credential::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_credential::Model, DbErr> {
        let now = Utc::now();
        entity::user_credential::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            encrypted_credential: ActiveValue::Set(self.encrypted_credential),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a credential row with default values.
///
/// Shorthand for `UserCredentialFactory::new(db).build().await`.
pub async fn create_user_credential(
    db: &DatabaseConnection,
) -> Result<entity::user_credential::Model, DbErr> {
    UserCredentialFactory::new(db).build().await
}

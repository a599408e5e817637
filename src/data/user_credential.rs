//! Credential data repository for database operations.
//!
//! This module provides the `UserCredentialRepository` for the encrypted credential
//! table. The repository only ever sees ciphertext; encryption and serialization are
//! done by the credential store service before anything reaches this layer.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::AppError, util::parse::user_id_to_db};

/// Repository providing database operations for encrypted credentials.
///
/// Generic over the connection so the same operations run on the pool or inside a
/// transaction.
pub struct UserCredentialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCredentialRepository<'a, C> {
    /// Creates a new UserCredentialRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserCredentialRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or replaces the ciphertext for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `encrypted_credential` - base64 ciphertext produced by the credential cipher
    ///
    /// # Returns
    /// - `Ok(())` - Row written
    /// - `Err(AppError::DbErr)` - Database error during upsert
    /// - `Err(AppError::InternalErr)` - User ID does not fit the column
    pub async fn upsert(&self, user_id: u64, encrypted_credential: String) -> Result<(), AppError> {
        let now = Utc::now();

        entity::prelude::UserCredential::insert(entity::user_credential::ActiveModel {
            user_id: ActiveValue::Set(user_id_to_db(user_id)?),
            encrypted_credential: ActiveValue::Set(encrypted_credential),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user_credential::Column::UserId)
                .update_columns([
                    entity::user_credential::Column::EncryptedCredential,
                    entity::user_credential::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets the stored ciphertext for a user.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Ciphertext found
    /// - `Ok(None)` - User has no stored credential
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<String>, AppError> {
        let entity = entity::prelude::UserCredential::find_by_id(user_id_to_db(user_id)?)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.encrypted_credential))
    }

    /// Deletes the credential row for a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row existed
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::UserCredential::delete_by_id(user_id_to_db(user_id)?)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

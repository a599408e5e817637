use dioxus_logger::tracing;

use crate::{config::Config, crypto::CredentialCipher, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so both user tables exist before
/// the bot or the scheduler touch them.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the credential encryption key, creating the key file on first run.
///
/// # Returns
/// - `Ok(CredentialCipher)` - Cipher bound to the process-wide key
/// - `Err(AppError::CryptoErr)` - Key file unreadable, unwritable, or malformed
pub fn load_cipher(config: &Config) -> Result<CredentialCipher, AppError> {
    let cipher = CredentialCipher::load_or_create(&config.encryption_key_path)?;

    tracing::debug!("Encryption key loaded from {}", config.encryption_key_path);

    Ok(cipher)
}

use crate::error::internal::InternalError;

/// Converts a Discord user id into the signed form stored in the database.
///
/// # Arguments
/// - `user_id` - Discord user snowflake
///
/// # Returns
/// - `Ok(i64)` - Storable user id
/// - `Err(InternalError::UserIdOutOfRange)` - The id exceeds `i64::MAX`
pub fn user_id_to_db(user_id: u64) -> Result<i64, InternalError> {
    i64::try_from(user_id).map_err(|_| InternalError::UserIdOutOfRange(user_id))
}

/// Converts a stored user id back into a Discord user snowflake.
///
/// # Arguments
/// - `user_id` - User id read from the database
///
/// # Returns
/// - `Ok(u64)` - Discord user id
/// - `Err(InternalError::InvalidStoredUserId)` - The stored id is negative
pub fn user_id_from_db(user_id: i64) -> Result<u64, InternalError> {
    u64::try_from(user_id).map_err(|_| InternalError::InvalidStoredUserId(user_id))
}

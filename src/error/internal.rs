use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord user id does not fit the signed 64-bit column it is stored in.
    ///
    /// Discord snowflakes stay below `i64::MAX`, so this indicates corrupted input.
    #[error("User ID {0} is outside the storable range")]
    UserIdOutOfRange(u64),

    /// A stored user id is negative and cannot be a Discord snowflake.
    #[error("Stored user ID {0} is not a valid Discord ID")]
    InvalidStoredUserId(i64),
}

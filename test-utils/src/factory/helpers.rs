//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Starts high enough to look like a Discord snowflake while staying well inside the
/// `i64` range the tables store.
static COUNTER: std::sync::atomic::AtomicU64 =
    std::sync::atomic::AtomicU64::new(100_000_000_000_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique user id in the signed form stored by the tables.
pub fn next_user_id() -> i64 {
    next_id() as i64
}

//! Database repository layer.
//!
//! Repositories handle the CRUD operations of the two user tables. They use SeaORM
//! entity models internally and return domain models so the service layer never
//! touches entities. Each repository borrows a connection for the duration of one
//! call; nothing holds a connection between calls.

pub mod user_credential;
pub mod user_setting;

#[cfg(test)]
mod test;

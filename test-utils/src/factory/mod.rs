//! Factory methods for creating test data.
//!
//! Each table has a factory struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let setting = factory::user_setting::create_user_setting(&db).await?;
//!     let enabled = factory::user_setting::UserSettingFactory::new(&db)
//!         .enabled(true)
//!         .threshold(160)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod user_credential;
pub mod user_setting;

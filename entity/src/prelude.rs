pub use super::user_credential::Entity as UserCredential;
pub use super::user_setting::Entity as UserSetting;

mod user_credential;
mod user_setting;

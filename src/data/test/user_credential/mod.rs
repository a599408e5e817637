use crate::{data::user_credential::UserCredentialRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod delete;
mod find_by_user_id;
mod upsert;

pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_credential_table;
mod m20251210_000002_create_user_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_credential_table::Migration),
            Box::new(m20251210_000002_create_user_setting_table::Migration),
        ]
    }
}

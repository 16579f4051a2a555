pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_access_codes;
mod m20261019_000002_index_access_codes_used_expires_at;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_access_codes::Migration),
            Box::new(m20261019_000002_index_access_codes_used_expires_at::Migration),
        ]
    }
}

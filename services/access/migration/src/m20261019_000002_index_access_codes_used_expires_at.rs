use sea_orm_migration::prelude::*;

/// Backs the sweep query `used = false AND expires_at < now`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(AccessCodes::Table)
                    .col(AccessCodes::Used)
                    .col(AccessCodes::ExpiresAt)
                    .name("idx_access_codes_used_expires_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_access_codes_used_expires_at")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum AccessCodes {
    Table,
    Used,
    ExpiresAt,
}

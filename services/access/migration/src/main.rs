use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(newsalert_access_migration::Migrator).await;
}

use anyhow::Context as _;
use tracing::info;

use newsalert_access::config::AccessConfig;
use newsalert_access::domain::frequency::SystemClock;
use newsalert_access::infra::db::{DbAccessCodeRepository, connect};
use newsalert_access::store::AccessStore;
use newsalert_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AccessConfig::load()?;
    let db = connect(&config).await?;

    let store = AccessStore::new(DbAccessCodeRepository { db }, SystemClock);
    store
        .ensure_store()
        .await
        .context("access store provisioning failed")?;

    info!("access store ready");
    Ok(())
}

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Database, DatabaseConnection, EntityName,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, sea_query::Expr,
};
use tracing::info;

use newsalert_access_migration::{Migrator, MigratorTrait, SchemaManager};
use newsalert_access_schema::access_codes;

use crate::config::AccessConfig;
use crate::domain::repository::AccessCodeRepository;
use crate::domain::types::{AccessCode, AccessCodeId};
use crate::error::AccessError;

/// Open the store connection described by `config`.
pub async fn connect(config: &AccessConfig) -> anyhow::Result<DatabaseConnection> {
    let url = config.connection_url()?;
    Database::connect(url.as_str())
        .await
        .context("connect to access store")
}

// ── AccessCode repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccessCodeRepository {
    pub db: DatabaseConnection,
}

impl AccessCodeRepository for DbAccessCodeRepository {
    async fn ensure_schema(&self) -> Result<(), AccessError> {
        let table = access_codes::Entity.table_name().to_owned();
        let exists = SchemaManager::new(&self.db)
            .has_table(&table)
            .await
            .context("check access store")?;
        if exists {
            info!(table = %table, "access store already exists");
        } else {
            info!(table = %table, "creating access store");
        }

        // Applies only what is pending, so a provisioned store is left as is.
        Migrator::up(&self.db, None)
            .await
            .context("provision access store")?;
        Ok(())
    }

    async fn insert(&self, code: &AccessCode) -> Result<(), AccessError> {
        access_codes::ActiveModel {
            id: Set(code.id.0),
            email: Set(code.email.clone()),
            used: Set(code.used),
            expires_at: Set(code.expires_at),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert access code")?;
        Ok(())
    }

    async fn find_by_id(&self, id: AccessCodeId) -> Result<Option<AccessCode>, AccessError> {
        let model = access_codes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find access code by id")?;
        Ok(model.map(access_code_from_model))
    }

    async fn consume(&self, id: AccessCodeId, now: DateTime<Utc>) -> Result<bool, AccessError> {
        let result = access_codes::Entity::update_many()
            .col_expr(access_codes::Column::Used, Expr::value(true))
            .filter(access_codes::Column::Id.eq(id.0))
            .filter(access_codes::Column::Used.eq(false))
            .filter(access_codes::Column::ExpiresAt.gt(now))
            .exec(&self.db)
            .await
            .context("consume access code")?;
        Ok(result.rows_affected == 1)
    }

    async fn list_expired_unused(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<AccessCode>, AccessError> {
        let models = access_codes::Entity::find()
            .filter(access_codes::Column::Used.eq(false))
            .filter(access_codes::Column::ExpiresAt.lt(now))
            .order_by_asc(access_codes::Column::ExpiresAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list expired access codes")?;
        Ok(models.into_iter().map(access_code_from_model).collect())
    }
}

fn access_code_from_model(model: access_codes::Model) -> AccessCode {
    AccessCode {
        id: AccessCodeId(model.id),
        email: model.email,
        used: model.used,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

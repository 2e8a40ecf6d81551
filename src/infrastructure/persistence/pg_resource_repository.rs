//! PostgreSQL implementation of the resource repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{MatchStatus, RegisteredResource};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

/// PostgreSQL repository over the `registered_resources` table.
///
/// The table is shared with the stub's registration flow; this repository
/// never inserts or updates rows.
pub struct PgResourceRepository {
    pool: Arc<PgPool>,
}

impl PgResourceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResourceRow {
    resource_id: String,
    name: String,
    description: Option<String>,
    match_status: String,
    resource_scopes: Vec<String>,
    rpt: Option<String>,
    pat: Option<String>,
    friendly_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResourceRow> for RegisteredResource {
    type Error = AppError;

    fn try_from(row: ResourceRow) -> Result<Self, Self::Error> {
        let match_status = row.match_status.parse::<MatchStatus>().map_err(|e| {
            AppError::internal(e.to_string(), json!({"resource_id": row.resource_id}))
        })?;

        Ok(RegisteredResource {
            resource_id: row.resource_id,
            name: row.name,
            description: row.description,
            match_status,
            resource_scopes: row.resource_scopes.into_iter().collect(),
            rpt: row.rpt,
            pat: row.pat,
            friendly_name: row.friendly_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn find_by_resource_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<RegisteredResource>, AppError> {
        let row = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT resource_id, name, description, match_status, resource_scopes,
                   rpt, pat, friendly_name, created_at, updated_at
            FROM registered_resources
            WHERE resource_id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(RegisteredResource::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<RegisteredResource>, AppError> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT resource_id, name, description, match_status, resource_scopes,
                   rpt, pat, friendly_name, created_at, updated_at
            FROM registered_resources
            ORDER BY created_at, resource_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(RegisteredResource::try_from).collect()
    }

    async fn delete_all(&self, resources: &[RegisteredResource]) -> Result<u64, AppError> {
        if resources.is_empty() {
            return Ok(0);
        }

        let ids: Vec<String> = resources.iter().map(|r| r.resource_id.clone()).collect();

        let result = sqlx::query("DELETE FROM registered_resources WHERE resource_id = ANY($1)")
            .bind(&ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registered_resources")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

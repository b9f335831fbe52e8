//! Generic CRUD execution: one statement, one round trip per operation.

use super::decode::{mysql_row_to_json, sqlite_row_to_json};
use crate::config::Resource;
use crate::error::AppError;
use crate::sql::{delete, insert, select_all, select_by_id, update, QueryBuf};
use crate::store::DbPool;
use serde_json::{Map, Value};
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

pub struct CrudService;

/// What a write statement reports back, whichever driver ran it.
struct WriteOutcome {
    rows_affected: u64,
    inserted_key: Value,
}

impl CrudService {
    /// Every row of the table.
    pub async fn list(pool: &DbPool, resource: &Resource) -> Result<Vec<Value>, AppError> {
        let q = select_all(resource);
        Self::query_many(pool, &q).await
    }

    /// Fetch one row by key. Returns JSON object or None.
    pub async fn read(
        pool: &DbPool,
        resource: &Resource,
        id: i64,
    ) -> Result<Option<Value>, AppError> {
        let q = select_by_id(resource, id);
        Self::query_one(pool, &q).await
    }

    /// Insert one row. Returns the generated key followed by the submitted body as received.
    pub async fn create(
        pool: &DbPool,
        resource: &Resource,
        body: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        let q = insert(resource, body);
        let outcome = Self::execute(pool, &q).await?;
        let mut created = Map::new();
        created.insert(resource.key_column.to_string(), outcome.inserted_key);
        created.extend(body.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(Value::Object(created))
    }

    /// Overwrite every writable column of one row. Returns affected row count.
    pub async fn update(
        pool: &DbPool,
        resource: &Resource,
        id: i64,
        body: &Map<String, Value>,
    ) -> Result<u64, AppError> {
        let q = update(resource, id, body);
        Ok(Self::execute(pool, &q).await?.rows_affected)
    }

    /// Delete one row by key. Returns affected row count.
    pub async fn delete(pool: &DbPool, resource: &Resource, id: i64) -> Result<u64, AppError> {
        let q = delete(resource, id);
        Ok(Self::execute(pool, &q).await?.rows_affected)
    }

    fn prepare_mysql(q: &QueryBuf) -> Query<'_, MySql, MySqlArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
    }

    fn prepare_sqlite(q: &QueryBuf) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
    }

    async fn query_one(pool: &DbPool, q: &QueryBuf) -> Result<Option<Value>, AppError> {
        Ok(match pool {
            DbPool::MySql(p) => Self::prepare_mysql(q)
                .fetch_optional(p)
                .await?
                .map(|r| mysql_row_to_json(&r)),
            DbPool::Sqlite(p) => Self::prepare_sqlite(q)
                .fetch_optional(p)
                .await?
                .map(|r| sqlite_row_to_json(&r)),
        })
    }

    async fn query_many(pool: &DbPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        Ok(match pool {
            DbPool::MySql(p) => {
                let rows = Self::prepare_mysql(q).fetch_all(p).await?;
                rows.iter().map(mysql_row_to_json).collect()
            }
            DbPool::Sqlite(p) => {
                let rows = Self::prepare_sqlite(q).fetch_all(p).await?;
                rows.iter().map(sqlite_row_to_json).collect()
            }
        })
    }

    async fn execute(pool: &DbPool, q: &QueryBuf) -> Result<WriteOutcome, AppError> {
        Ok(match pool {
            DbPool::MySql(p) => {
                let result = Self::prepare_mysql(q).execute(p).await?;
                WriteOutcome {
                    rows_affected: result.rows_affected(),
                    inserted_key: Value::from(result.last_insert_id()),
                }
            }
            DbPool::Sqlite(p) => {
                let result = Self::prepare_sqlite(q).execute(p).await?;
                WriteOutcome {
                    rows_affected: result.rows_affected(),
                    inserted_key: Value::from(result.last_insert_rowid()),
                }
            }
        })
    }
}

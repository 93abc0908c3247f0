use crate::domain::schema::SchemaRegistry;
use crate::infrastructure::schema::{SqlDialect, create_table_sql};
use sqlx::{
    PgPool, SqlitePool,
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

/// Connection pool for whichever backend the database URL selects.
#[derive(Clone, Debug)]
pub enum DatabasePool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DatabasePool {
    pub fn dialect(&self) -> SqlDialect {
        match self {
            Self::Postgres(_) => SqlDialect::Postgres,
            Self::Sqlite(_) => SqlDialect::Sqlite,
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DatabasePool, sqlx::Error> {
    match SqlDialect::from_url(database_url) {
        Some(SqlDialect::Postgres) => {
            let pool = PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(database_url)
                .await?;
            Ok(DatabasePool::Postgres(pool))
        }
        Some(SqlDialect::Sqlite) => {
            let options = SqliteConnectOptions::from_str(database_url)?;
            let pool = if is_in_memory(database_url) {
                // Every in-memory connection is its own database; keep exactly one alive.
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            } else {
                SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .connect_with(options)
                    .await?
            };
            Ok(DatabasePool::Sqlite(pool))
        }
        None => Err(sqlx::Error::Configuration(
            format!("unsupported database url: {database_url}").into(),
        )),
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the table of every registered schema. Safe to run repeatedly.
pub async fn apply_schemas(pool: &DatabasePool, registry: &SchemaRegistry) -> Result<(), sqlx::Error> {
    for schema in registry.iter() {
        let ddl = create_table_sql(schema, pool.dialect());
        match pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query(&ddl).execute(pool).await?;
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query(&ddl).execute(pool).await?;
            }
        }
        tracing::info!(table = schema.table, "schema applied");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://articles.db?mode=rwc"));
    }

    #[tokio::test]
    async fn rejects_unknown_scheme() {
        let err = init_pool("mysql://localhost/cms", 4).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)));
    }
}

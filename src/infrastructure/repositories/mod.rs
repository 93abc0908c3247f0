// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod sqlite_article;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};

use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use crate::infrastructure::database::DatabasePool;
use std::sync::Arc;

/// Build the article repositories matching the pool's backend.
pub fn article_repositories(
    pool: &DatabasePool,
) -> (Arc<dyn ArticleWriteRepository>, Arc<dyn ArticleReadRepository>) {
    match pool {
        DatabasePool::Postgres(pool) => (
            Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
            Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        ),
        DatabasePool::Sqlite(pool) => (
            Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
            Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        ),
    }
}

// tests/support/helpers.rs
use super::mocks::InMemoryArticleRepo;
use article_store::application::services::ApplicationServices;
use article_store::domain::article::{
    ARTICLE_SCHEMA, ArticleReadRepository, ArticleWriteRepository,
};
use article_store::domain::schema::SchemaRegistry;
use article_store::infrastructure::database::{self, DatabasePool};
use article_store::infrastructure::repositories;
use std::sync::Arc;

pub fn article_registry() -> SchemaRegistry {
    SchemaRegistry::new()
        .register(&ARTICLE_SCHEMA)
        .expect("register article schema")
}

/// Fresh in-memory SQLite database with the article table created.
pub async fn sqlite_pool() -> DatabasePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::apply_schemas(&pool, &article_registry())
        .await
        .expect("apply schemas");
    pool
}

/// Services wired to a fresh in-memory SQLite database.
pub async fn sqlite_services() -> (ApplicationServices, DatabasePool) {
    let pool = sqlite_pool().await;
    let (write, read) = repositories::article_repositories(&pool);
    (ApplicationServices::new(write, read), pool)
}

/// Services wired to a shared map-backed repository.
pub fn in_memory_services() -> (ApplicationServices, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo.clone();
    (ApplicationServices::new(write, read), repo)
}

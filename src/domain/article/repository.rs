use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when no row has the given id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Hard delete. Fails with `DomainError::NotFound` when no row was removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns one page ordered by id ascending, plus the total row count.
    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Article>, u64)>;
}

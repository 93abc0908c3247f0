// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use article_store::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_store::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering},
};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// Map-backed article store implementing both repository traits.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicI64,
    writes: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Number of insert/update/delete calls that reached the repository.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = ArticleId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)?;
        let stored = Article {
            id,
            title: article.title,
            body: article.body,
        };
        self.rows.lock().unwrap().insert(id.into(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            article.set_title(title);
        }
        if let Some(body) = update.body {
            article.set_body(body);
        }
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Article>, u64)> {
        let rows = self.rows.lock().unwrap();
        let skip = (page.max(1) - 1) as usize * page_size as usize;
        let items = rows
            .values()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();
        Ok((items, rows.len() as u64))
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// Repository whose every call fails with a persistence error.
pub struct FailingArticleRepo;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        broken()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        broken()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        broken()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn list_page(&self, _page: u32, _page_size: u32) -> DomainResult<(Vec<Article>, u64)> {
        broken()
    }
}

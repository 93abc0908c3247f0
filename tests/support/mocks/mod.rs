// tests/support/mocks/mod.rs
pub mod article_repos;
pub mod fixtures;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
pub use fixtures::{max_body, max_title, too_long_body, too_long_title};

pub mod entity;
pub mod repository;
pub mod schema;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use schema::ARTICLE_SCHEMA;
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};

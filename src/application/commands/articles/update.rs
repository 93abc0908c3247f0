use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleBody, ArticleId, ArticleTitle, ArticleUpdate},
};

/// Partial update: fields left as `None` keep their stored value.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, body } = command;
        let id = ArticleId::new(id)?;

        let mut update = ArticleUpdate::new(id);
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(body) = body {
            update = update.with_body(ArticleBody::new(body)?);
        }

        if update.is_empty() {
            let current = self
                .read_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("article not found"))?;
            return Ok(current.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::debug!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }

    /// Write every field of an in-memory article back to storage.
    pub async fn save_article(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let saved = self.write_repo.update(ArticleUpdate::from(article)).await?;
        tracing::debug!(article_id = %saved.id, "article saved");
        Ok(saved.into())
    }
}

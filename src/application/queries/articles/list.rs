use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, Page},
    error::ApplicationResult,
};

pub struct ListArticlesQuery {
    pub page: u32,
    pub page_size: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let (page, page_size) = normalize_paging(query.page, query.page_size);

        let (records, total) = self.read_repo.list_page(page, page_size).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, page, page_size, total))
    }
}

fn normalize_paging(page: u32, page_size: u32) -> (u32, u32) {
    const DEFAULT_PAGE_SIZE: u32 = 20;
    const MAX_PAGE_SIZE: u32 = 100;

    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size.min(MAX_PAGE_SIZE)
    };

    (page.max(1), page_size)
}

#[cfg(test)]
mod tests {
    use super::normalize_paging;

    #[test]
    fn paging_defaults_and_caps() {
        assert_eq!(normalize_paging(0, 0), (1, 20));
        assert_eq!(normalize_paging(3, 500), (3, 100));
        assert_eq!(normalize_paging(2, 7), (2, 7));
    }
}

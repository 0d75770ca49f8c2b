use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// 逐頁刪除 Strapi 中的所有電影
pub struct MoviePurger {
    store: Arc<dyn ContentStore>,
    page_size: usize,
}

impl MoviePurger {
    pub fn new(store: Arc<dyn ContentStore>, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    /// 每次都取第一頁，直到回傳空頁；任何刪除失敗即中止
    pub async fn purge_all(&self) -> Result<usize> {
        let mut deleted = 0;

        loop {
            let ids = self.store.list_movie_ids(self.page_size).await?;
            if ids.is_empty() {
                break;
            }

            for id in ids {
                self.store.delete_movie(id).await?;
                deleted += 1;
            }
            tracing::debug!("🗑️ Deleted {} movies so far", deleted);
        }

        tracing::info!("🗑️ Deleted {} movies from Strapi", deleted);
        Ok(deleted)
    }
}

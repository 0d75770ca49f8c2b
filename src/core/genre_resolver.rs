use crate::core::cache::SyncCache;
use crate::domain::ports::{CatalogApi, ContentStore};
use crate::utils::error::{Result, SyncError};

/// 將 TMDB 類型 id 對應為 Strapi 類型 id，必要時建立
pub struct GenreResolver<'a> {
    catalog: &'a dyn CatalogApi,
    store: &'a dyn ContentStore,
}

impl<'a> GenreResolver<'a> {
    pub fn new(catalog: &'a dyn CatalogApi, store: &'a dyn ContentStore) -> Self {
        Self { catalog, store }
    }

    /// 確保 TMDB 類型目錄已快取。
    /// 取得失敗或目錄為空都視為錯誤，且不寫入快取，下一輪可重試。
    pub async fn ensure_catalog(&self, cache: &mut SyncCache) -> Result<()> {
        if cache.has_catalog_genres() {
            return Ok(());
        }

        let genres = self.catalog.list_genres().await?;
        if genres.is_empty() {
            return Err(SyncError::ProcessingError {
                message: "TMDB returned an empty genre catalog".to_string(),
            });
        }

        tracing::info!("🎭 Cached {} TMDB genres", genres.len());
        cache.set_catalog_genres(genres);
        Ok(())
    }

    async fn ensure_store_index(&self, cache: &mut SyncCache) {
        if cache.has_store_genres() {
            return;
        }

        match self.store.list_genres(None).await {
            Ok(genres) => {
                tracing::info!("🎭 Loaded {} existing Strapi genres", genres.len());
                cache.load_store_genres(genres.into_iter().map(|g| (g.name, g.id)));
            }
            Err(e) => {
                tracing::error!("❌ Failed to load Strapi genres, continuing without index: {}", e);
                cache.load_store_genres(Vec::new());
            }
        }
    }

    /// 找不到或失敗時回傳 None，呼叫端略過該類型
    pub async fn resolve(&self, cache: &mut SyncCache, external_id: u64) -> Option<u64> {
        if let Err(e) = self.ensure_catalog(cache).await {
            tracing::warn!("⚠️ TMDB genres unavailable, cannot map genre {}: {}", external_id, e);
            return None;
        }
        self.ensure_store_index(cache).await;

        let name = match cache.catalog_genre_name(external_id) {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!("⚠️ TMDB genre {} not found in catalog", external_id);
                return None;
            }
        };

        if let Some(id) = cache.store_genre_id(&name) {
            return Some(id);
        }

        tracing::info!("➕ Creating genre \"{}\" in Strapi", name);
        match self.store.create_genre(&name).await {
            Ok(genre) => {
                tracing::info!("✅ Genre \"{}\" created with id {}", name, genre.id);
                cache.insert_store_genre(name, genre.id);
                Some(genre.id)
            }
            Err(e) => {
                tracing::error!("❌ Failed to create genre \"{}\": {}", name, e);
                None
            }
        }
    }

    pub async fn resolve_all(&self, cache: &mut SyncCache, external_ids: &[u64]) -> Vec<u64> {
        let mut ids = Vec::with_capacity(external_ids.len());
        for &external_id in external_ids {
            if let Some(id) = self.resolve(cache, external_id).await {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

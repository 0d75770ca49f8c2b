use crate::core::cache::SyncCache;
use crate::domain::ports::{CatalogApi, ContentStore};
use crate::utils::error::Result;

/// 取得電影前幾名演員並對應為 Strapi 演員 id
pub struct ActorResolver<'a> {
    catalog: &'a dyn CatalogApi,
    store: &'a dyn ContentStore,
    cast_limit: usize,
}

impl<'a> ActorResolver<'a> {
    pub fn new(catalog: &'a dyn CatalogApi, store: &'a dyn ContentStore, cast_limit: usize) -> Self {
        Self {
            catalog,
            store,
            cast_limit,
        }
    }

    /// credits 取得失敗時回傳空清單，電影照常匯入
    pub async fn resolve(&self, cache: &mut SyncCache, movie_id: u64) -> Vec<u64> {
        let cast = match self.catalog.movie_credits(movie_id).await {
            Ok(cast) => cast,
            Err(e) => {
                tracing::warn!("⚠️ Could not fetch credits for movie {}: {}", movie_id, e);
                return Vec::new();
            }
        };

        let mut ids = Vec::with_capacity(cast.len().min(self.cast_limit));
        for actor in cast.into_iter().take(self.cast_limit) {
            match self.resolve_name(cache, &actor.name).await {
                Ok(id) => {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                Err(e) => {
                    tracing::warn!("⚠️ Skipping actor \"{}\" of movie {}: {}", actor.name, movie_id, e);
                }
            }
        }
        ids
    }

    async fn resolve_name(&self, cache: &mut SyncCache, name: &str) -> Result<u64> {
        if let Some(id) = cache.store_actor_id(name) {
            return Ok(id);
        }

        let id = match self.store.list_actors(name).await?.first() {
            Some(existing) => existing.id,
            None => {
                tracing::info!("➕ Creating actor \"{}\" in Strapi", name);
                self.store.create_actor(name).await?.id
            }
        };

        cache.insert_store_actor(name.to_string(), id);
        Ok(id)
    }
}

use crate::domain::model::CatalogGenre;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 匯入過程中共用的快取；持有者為呼叫端，不是模組全域狀態
pub type SharedCache = Arc<Mutex<SyncCache>>;

/// 名稱到 Strapi id 的對照。只會新增，不會自動失效；
/// 若 Strapi 資料被外部修改，需呼叫 `clear()`。
#[derive(Debug, Default)]
pub struct SyncCache {
    catalog_genres: Option<HashMap<u64, String>>,
    store_genres: Option<HashMap<String, u64>>,
    store_actors: HashMap<String, u64>,
}

impl SyncCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedCache {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn clear(&mut self) {
        self.catalog_genres = None;
        self.store_genres = None;
        self.store_actors.clear();
    }

    pub fn has_catalog_genres(&self) -> bool {
        self.catalog_genres.is_some()
    }

    pub fn set_catalog_genres(&mut self, genres: Vec<CatalogGenre>) {
        self.catalog_genres = Some(genres.into_iter().map(|g| (g.id, g.name)).collect());
    }

    pub fn catalog_genre_name(&self, external_id: u64) -> Option<&str> {
        self.catalog_genres
            .as_ref()
            .and_then(|genres| genres.get(&external_id))
            .map(String::as_str)
    }

    pub fn has_store_genres(&self) -> bool {
        self.store_genres.is_some()
    }

    /// 標記 Strapi 類型索引已載入 (即使為空)
    pub fn load_store_genres<I>(&mut self, genres: I)
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        self.store_genres
            .get_or_insert_with(HashMap::new)
            .extend(genres);
    }

    pub fn store_genre_id(&self, name: &str) -> Option<u64> {
        self.store_genres
            .as_ref()
            .and_then(|genres| genres.get(name))
            .copied()
    }

    pub fn insert_store_genre(&mut self, name: String, id: u64) {
        self.store_genres
            .get_or_insert_with(HashMap::new)
            .insert(name, id);
    }

    pub fn store_actor_id(&self, name: &str) -> Option<u64> {
        self.store_actors.get(name).copied()
    }

    pub fn insert_store_actor(&mut self, name: String, id: u64) {
        self.store_actors.insert(name, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_genres_lookup() {
        let mut cache = SyncCache::new();
        assert!(!cache.has_catalog_genres());

        cache.set_catalog_genres(vec![CatalogGenre {
            id: 28,
            name: "Acción".to_string(),
        }]);

        assert!(cache.has_catalog_genres());
        assert_eq!(cache.catalog_genre_name(28), Some("Acción"));
        assert_eq!(cache.catalog_genre_name(99), None);
    }

    #[test]
    fn test_empty_store_index_counts_as_loaded() {
        let mut cache = SyncCache::new();
        cache.load_store_genres(Vec::new());
        assert!(cache.has_store_genres());
        assert_eq!(cache.store_genre_id("Drama"), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cache = SyncCache::new();
        cache.set_catalog_genres(vec![CatalogGenre {
            id: 18,
            name: "Drama".to_string(),
        }]);
        cache.insert_store_genre("Drama".to_string(), 1);
        cache.insert_store_actor("Ana".to_string(), 2);

        cache.clear();

        assert!(!cache.has_catalog_genres());
        assert!(!cache.has_store_genres());
        assert_eq!(cache.store_actor_id("Ana"), None);
    }
}

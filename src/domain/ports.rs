use crate::domain::model::{
    CatalogActor, CatalogGenre, CatalogMovie, NewMovie, StoredActor, StoredGenre, StoredMovie,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部電影目錄 (TheMovieDB)，唯讀
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_genres(&self) -> Result<Vec<CatalogGenre>>;
    async fn now_playing(&self, page: u32) -> Result<Vec<CatalogMovie>>;
    /// 依演出順序排序的演員名單
    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CatalogActor>>;
}

/// 持久化內容庫 (Strapi)
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_genres(&self, name: Option<&str>) -> Result<Vec<StoredGenre>>;
    async fn create_genre(&self, name: &str) -> Result<StoredGenre>;
    async fn list_actors(&self, name: &str) -> Result<Vec<StoredActor>>;
    async fn create_actor(&self, name: &str) -> Result<StoredActor>;
    async fn find_movie_ids_by_external_id(&self, external_id: u64) -> Result<Vec<u64>>;
    async fn create_movie(&self, movie: &NewMovie) -> Result<u64>;
    async fn list_movies_with_relations(&self) -> Result<Vec<StoredMovie>>;
    async fn list_movie_ids(&self, page_size: usize) -> Result<Vec<u64>>;
    async fn delete_movie(&self, id: u64) -> Result<()>;
}

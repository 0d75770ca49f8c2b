use crate::domain::model::{MovieView, StoredMovie};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use std::sync::Arc;

impl From<StoredMovie> for MovieView {
    fn from(movie: StoredMovie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            vote_count: movie.vote_count,
            vote_average: movie.vote_average,
            poster_url: movie.poster_url,
            genres: movie.genres.into_iter().map(|g| g.name).collect(),
            actors: movie.actors.into_iter().map(|a| a.name).collect(),
        }
    }
}

pub struct MovieReader {
    store: Arc<dyn ContentStore>,
}

impl MovieReader {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// `city` 僅被接受與記錄，Strapi 電影資料沒有城市欄位可供篩選
    pub async fn list(&self, city: Option<&str>) -> Result<Vec<MovieView>> {
        if let Some(city) = city {
            tracing::debug!("City filter \"{}\" requested but not applied", city);
        }

        let movies = self.store.list_movies_with_relations().await?;
        tracing::info!("📂 Fetched {} movies from Strapi", movies.len());

        Ok(movies.into_iter().map(MovieView::from).collect())
    }
}

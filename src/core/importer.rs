use crate::config::AppConfig;
use crate::core::actor_resolver::ActorResolver;
use crate::core::cache::{SharedCache, SyncCache};
use crate::core::genre_resolver::GenreResolver;
use crate::domain::model::{CatalogMovie, ImportSummary, NewMovie};
use crate::domain::ports::{CatalogApi, ContentStore};
use crate::utils::error::{Result, SyncError};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub page: u32,
    pub cast_limit: usize,
    pub image_base_url: String,
}

impl From<&AppConfig> for ImportOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            page: config.catalog.page,
            cast_limit: config.catalog.cast_limit,
            image_base_url: config.catalog.image_base_url.clone(),
        }
    }
}

enum MovieOutcome {
    Saved(u64),
    Duplicate,
}

/// 將一頁 TMDB 上映中電影同步到 Strapi
pub struct MovieImporter {
    catalog: Arc<dyn CatalogApi>,
    store: Arc<dyn ContentStore>,
    cache: SharedCache,
    options: ImportOptions,
}

impl MovieImporter {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        store: Arc<dyn ContentStore>,
        cache: SharedCache,
        options: ImportOptions,
    ) -> Self {
        Self {
            catalog,
            store,
            cache,
            options,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// 執行一輪匯入。類型目錄或電影清單取得失敗時整輪中止；
    /// 單部電影失敗只記錄，不影響其他電影。
    pub async fn run(&self) -> Result<ImportSummary> {
        let started_at = chrono::Utc::now();
        tracing::info!(
            started_at = %started_at.to_rfc3339(),
            "🚀 Starting import from TMDB into Strapi"
        );

        // 同一個 process 內的匯入依序執行
        let mut cache = self.cache.lock().await;

        let genres = GenreResolver::new(self.catalog.as_ref(), self.store.as_ref());
        let actors = ActorResolver::new(
            self.catalog.as_ref(),
            self.store.as_ref(),
            self.options.cast_limit,
        );

        if let Err(e) = genres.ensure_catalog(&mut cache).await {
            tracing::error!("❌ Could not fetch the TMDB genre catalog: {}", e);
            return Err(SyncError::precondition(format!(
                "Could not fetch the TMDB genre catalog: {}",
                e
            )));
        }

        let movies = match self.catalog.now_playing(self.options.page).await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!("❌ Could not fetch now playing movies: {}", e);
                return Err(SyncError::precondition(format!(
                    "Could not fetch now playing movies: {}",
                    e
                )));
            }
        };
        tracing::info!("📡 Fetched {} movies from TMDB", movies.len());

        let mut summary = ImportSummary {
            total_movies_processed: movies.len(),
            ..Default::default()
        };

        for movie in &movies {
            match self.import_movie(&mut cache, &genres, &actors, movie).await {
                Ok(MovieOutcome::Saved(id)) => {
                    tracing::info!("✅ Movie \"{}\" saved in Strapi with id {}", movie.title, id);
                    summary.saved += 1;
                }
                Ok(MovieOutcome::Duplicate) => {
                    tracing::info!(
                        "⏭️ Movie \"{}\" (TMDB id {}) already exists, skipping",
                        movie.title,
                        movie.id
                    );
                    summary.duplicate += 1;
                }
                Err(e) => {
                    tracing::error!("❌ Failed to import movie \"{}\": {}", movie.title, e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            saved = summary.saved,
            duplicate = summary.duplicate,
            failed = summary.failed,
            total = summary.total_movies_processed,
            elapsed_ms = (chrono::Utc::now() - started_at).num_milliseconds(),
            "🏁 Import finished"
        );
        Ok(summary)
    }

    async fn import_movie(
        &self,
        cache: &mut SyncCache,
        genres: &GenreResolver<'_>,
        actors: &ActorResolver<'_>,
        movie: &CatalogMovie,
    ) -> Result<MovieOutcome> {
        let existing = self.store.find_movie_ids_by_external_id(movie.id).await?;
        if !existing.is_empty() {
            return Ok(MovieOutcome::Duplicate);
        }

        let genre_ids = genres.resolve_all(cache, &movie.genre_ids).await;
        let actor_ids = actors.resolve(cache, movie.id).await;

        let new_movie = self.build_movie(movie, genre_ids, actor_ids);
        let id = self.store.create_movie(&new_movie).await?;
        Ok(MovieOutcome::Saved(id))
    }

    fn build_movie(&self, movie: &CatalogMovie, genre_ids: Vec<u64>, actor_ids: Vec<u64>) -> NewMovie {
        NewMovie {
            title: movie.title.clone(),
            release_date: movie
                .release_date
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            vote_count: movie.vote_count,
            vote_average: movie.vote_average,
            external_id: movie.id,
            poster_url: movie.poster_path.as_deref().map(|path| {
                format!("{}{}", self.options.image_base_url.trim_end_matches('/'), path)
            }),
            genre_ids,
            actor_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fakes::{cast, genre, movie, FakeCatalog, FakeStore};

    fn options() -> ImportOptions {
        ImportOptions {
            page: 1,
            cast_limit: 3,
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }

    fn importer(catalog: FakeCatalog, store: Arc<FakeStore>) -> MovieImporter {
        MovieImporter::new(Arc::new(catalog), store, SyncCache::shared(), options())
    }

    #[tokio::test]
    async fn test_one_new_one_duplicate() {
        let catalog = FakeCatalog::new(
            vec![genre(28, "Acción")],
            vec![movie(1, "New", &[28]), movie(2, "Old", &[28])],
        )
        .with_credits(1, cast(&["Ana"]))
        .with_credits(2, cast(&["Luis"]));
        let store = Arc::new(FakeStore::new().with_existing_movie(2, "Old"));

        let summary = importer(catalog, store.clone()).run().await.unwrap();

        assert_eq!(summary.saved, 1);
        assert_eq!(summary.duplicate, 1);
        assert_eq!(summary.total_movies_processed, 2);
        assert_eq!(summary.saved + summary.duplicate, summary.total_movies_processed);
        // 重複電影不觸發演員解析
        assert_eq!(store.actor_names(), vec!["Ana"]);
    }

    #[tokio::test]
    async fn test_genre_catalog_failure_is_fatal_without_writes() {
        let catalog = FakeCatalog {
            movies: Some(vec![movie(1, "New", &[28])]),
            ..Default::default()
        };
        let store = Arc::new(FakeStore::new());

        let err = importer(catalog, store.clone()).run().await.unwrap_err();

        assert!(matches!(err, SyncError::PreconditionError { .. }));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_movie_page_failure_is_fatal() {
        let catalog = FakeCatalog {
            genres: Some(vec![genre(28, "Acción")]),
            ..Default::default()
        };
        let store = Arc::new(FakeStore::new());

        let result = importer(catalog, store.clone()).run().await;

        assert!(matches!(result, Err(SyncError::PreconditionError { .. })));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_credits_failure_still_saves_movie() {
        let catalog = FakeCatalog::new(
            vec![genre(28, "Acción")],
            vec![movie(1, "No credits", &[28]), movie(2, "With credits", &[])],
        )
        .with_credits(2, cast(&["Ana"]));
        let store = Arc::new(FakeStore::new());

        let summary = importer(catalog, store.clone()).run().await.unwrap();

        assert_eq!(summary.saved, 2);
        let movies = store.movies();
        let no_credits = movies.iter().find(|m| m.external_id == 1).unwrap();
        let with_credits = movies.iter().find(|m| m.external_id == 2).unwrap();
        assert!(no_credits.actor_ids.is_empty());
        assert_eq!(no_credits.genre_ids.len(), 1);
        assert_eq!(with_credits.actor_ids.len(), 1);
    }

    #[tokio::test]
    async fn test_single_movie_failure_does_not_abort_batch() {
        let catalog = FakeCatalog::new(
            vec![genre(28, "Acción")],
            vec![movie(1, "Broken", &[28]), movie(2, "Fine", &[28])],
        );
        let store = Arc::new(FakeStore::new().failing_on("Broken"));

        let summary = importer(catalog, store.clone()).run().await.unwrap();

        assert_eq!(summary.saved, 1);
        assert_eq!(summary.duplicate, 0);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_movies_processed, 2);
    }

    #[tokio::test]
    async fn test_second_pass_only_finds_duplicates() {
        let catalog = FakeCatalog::new(
            vec![genre(28, "Acción"), genre(18, "Drama")],
            vec![movie(1, "A", &[28, 18]), movie(2, "B", &[18])],
        );
        let store = Arc::new(FakeStore::new());
        let importer = importer(catalog, store.clone());

        importer.run().await.unwrap();
        let second = importer.run().await.unwrap();

        assert_eq!(second.saved, 0);
        assert_eq!(second.duplicate, 2);
        assert_eq!(store.genre_names().len(), 2);
    }

    #[tokio::test]
    async fn test_movie_fields_are_mapped() {
        let mut dated = movie(7, "Dated", &[]);
        dated.release_date = Some(String::new());
        let catalog = FakeCatalog::new(vec![genre(28, "Acción")], vec![dated]);
        let store = Arc::new(FakeStore::new());

        importer(catalog, store.clone()).run().await.unwrap();

        let saved = &store.movies()[0];
        assert_eq!(saved.release_date, None);
        assert_eq!(
            saved.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/7.jpg")
        );
        assert_eq!(saved.external_id, 7);
    }
}

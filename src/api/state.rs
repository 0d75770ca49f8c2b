use crate::adapters::{StrapiClient, TmdbClient};
use crate::config::AppConfig;
use crate::core::cache::SyncCache;
use crate::core::importer::{ImportOptions, MovieImporter};
use crate::core::purger::MoviePurger;
use crate::core::reader::MovieReader;
use crate::domain::ports::{CatalogApi, ContentStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub importer: Arc<MovieImporter>,
    pub reader: Arc<MovieReader>,
    pub purger: Arc<MoviePurger>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        store: Arc<dyn ContentStore>,
        config: &AppConfig,
    ) -> Self {
        let importer = MovieImporter::new(
            catalog,
            store.clone(),
            SyncCache::shared(),
            ImportOptions::from(config),
        );

        Self {
            importer: Arc::new(importer),
            reader: Arc::new(MovieReader::new(store.clone())),
            purger: Arc::new(MoviePurger::new(store, config.store.page_size)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let catalog: Arc<dyn CatalogApi> = Arc::new(TmdbClient::new(&config.catalog));
        let store: Arc<dyn ContentStore> = Arc::new(StrapiClient::new(&config.store));
        Self::new(catalog, store, config)
    }
}

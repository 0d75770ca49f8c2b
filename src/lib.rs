pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{StrapiClient, TmdbClient};
pub use api::{create_router, AppState};
pub use config::{AppConfig, CliConfig};
pub use crate::core::{cache::SyncCache, importer::MovieImporter, purger::MoviePurger, reader::MovieReader};
pub use domain::model::{ImportSummary, MovieView};
pub use utils::error::{Result, SyncError};

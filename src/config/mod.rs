pub mod cli;
pub mod env;
pub mod toml_config;

pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_secret, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "es-ES";
/// catalog.cast_limit 上限
pub const MAX_CAST_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_cast_limit")]
    pub cast_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub token: String,
    #[serde(default = "default_genres_collection")]
    pub genres_collection: String,
    #[serde(default = "default_actors_collection")]
    pub actors_collection: String,
    #[serde(default = "default_movies_collection")]
    pub movies_collection: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_tmdb_base_url() -> String {
    DEFAULT_TMDB_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_TMDB_IMAGE_BASE_URL.to_string()
}

fn default_page() -> u32 {
    1
}

fn default_cast_limit() -> usize {
    3
}

fn default_genres_collection() -> String {
    "generos".to_string()
}

fn default_actors_collection() -> String {
    "actors".to_string()
}

fn default_movies_collection() -> String {
    "peliculas".to_string()
}

fn default_page_size() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: default_language(),
            image_base_url: default_image_base_url(),
            page: default_page(),
            cast_limit: default_cast_limit(),
        }
    }
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            genres_collection: default_genres_collection(),
            actors_collection: default_actors_collection(),
            movies_collection: default_movies_collection(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// 套用命令列覆蓋設定
    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.base_url", &self.catalog.base_url)?;
        validate_url("catalog.image_base_url", &self.catalog.image_base_url)?;
        validate_secret("catalog.api_key", &self.catalog.api_key)?;
        validate_non_empty_string("catalog.language", &self.catalog.language)?;
        validate_range("catalog.page", self.catalog.page, 1, 500)?;
        validate_range("catalog.cast_limit", self.catalog.cast_limit, 1, MAX_CAST_LIMIT)?;

        validate_url("store.base_url", &self.store.base_url)?;
        validate_secret("store.token", &self.store.token)?;
        validate_non_empty_string("store.genres_collection", &self.store.genres_collection)?;
        validate_non_empty_string("store.actors_collection", &self.store.actors_collection)?;
        validate_non_empty_string("store.movies_collection", &self.store.movies_collection)?;
        validate_range("store.page_size", self.store.page_size, 1, 1000)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

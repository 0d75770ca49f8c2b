use crate::config::{AppConfig, CatalogConfig, ServerConfig, StoreConfig};
use crate::utils::error::{Result, SyncError};

impl AppConfig {
    /// 從環境變數 (及 .env) 建立配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| SyncError::MissingConfigError {
                field: key.to_string(),
            })
        };

        let mut server = ServerConfig::default();
        if let Some(host) = lookup("HOST") {
            server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            server.port = port
                .parse()
                .map_err(|_| SyncError::InvalidConfigValueError {
                    field: "PORT".to_string(),
                    value: port.clone(),
                    reason: "Port must be a number between 0 and 65535".to_string(),
                })?;
        }

        let mut catalog = CatalogConfig::new(
            lookup("TMDB_BASE_URL").unwrap_or_else(|| super::DEFAULT_TMDB_BASE_URL.to_string()),
            required("TMDB_API_KEY")?,
        );
        if let Some(language) = lookup("TMDB_LANGUAGE") {
            catalog.language = language;
        }
        if let Some(image_base_url) = lookup("TMDB_IMAGE_BASE_URL") {
            catalog.image_base_url = image_base_url;
        }

        let store = StoreConfig::new(required("STRAPI_API_URL")?, required("STRAPI_TOKEN")?);

        Ok(Self {
            server,
            catalog,
            store,
        })
    }
}

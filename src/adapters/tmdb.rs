use crate::adapters::read_json;
use crate::config::CatalogConfig;
use crate::domain::model::{CatalogActor, CatalogGenre, CatalogMovie};
use crate::domain::ports::CatalogApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "TMDB";

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<CatalogGenre>,
}

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(default)]
    results: Vec<CatalogMovie>,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CatalogActor>,
}

/// TheMovieDB v3 REST 客戶端
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("Making TMDB request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .query(extra)
            .send()
            .await?;

        read_json(SERVICE, response).await
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn list_genres(&self) -> Result<Vec<CatalogGenre>> {
        let data: GenreListResponse = self.get_json("/genre/movie/list", &[]).await?;
        Ok(data.genres)
    }

    async fn now_playing(&self, page: u32) -> Result<Vec<CatalogMovie>> {
        let data: MovieListResponse = self
            .get_json("/movie/now_playing", &[("page", page.to_string())])
            .await?;
        Ok(data.results)
    }

    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CatalogActor>> {
        let path = format!("/movie/{}/credits", movie_id);
        let data: CreditsResponse = self.get_json(&path, &[]).await?;

        let mut cast = data.cast;
        cast.sort_by_key(|actor| actor.order);
        Ok(cast)
    }
}

use crate::adapters::{ensure_success, read_json};
use crate::config::StoreConfig;
use crate::domain::model::{NewMovie, StoredActor, StoredGenre, StoredMovie};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

const SERVICE: &str = "Strapi";

/// Strapi v4 回應外層 `{ data: ... }`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct Payload<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct Entry<A> {
    id: u64,
    attributes: A,
}

/// Strapi 對空欄位回傳 null
#[derive(Debug, Deserialize)]
struct NamedAttributes {
    #[serde(default)]
    nombre: Option<String>,
}

impl Entry<NamedAttributes> {
    /// 沒有名稱的項目不保留
    fn into_named(self) -> Option<(u64, String)> {
        self.attributes.nombre.map(|name| (self.id, name))
    }
}

#[derive(Debug, Serialize)]
struct NamedPayload<'a> {
    nombre: &'a str,
}

#[derive(Debug, Deserialize)]
struct IdOnly {
    id: u64,
}

/// 關聯欄位可能是單筆、多筆或 null
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelationData {
    Many(Vec<Entry<NamedAttributes>>),
    One(Entry<NamedAttributes>),
}

#[derive(Debug, Default, Deserialize)]
struct Relation {
    #[serde(default)]
    data: Option<RelationData>,
}

impl Relation {
    fn into_named(self) -> Vec<(u64, String)> {
        match self.data {
            Some(RelationData::Many(entries)) => {
                entries.into_iter().filter_map(Entry::into_named).collect()
            }
            Some(RelationData::One(entry)) => entry.into_named().into_iter().collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieAttributes {
    #[serde(default)]
    titulo: Option<String>,
    #[serde(default)]
    fecha_estreno: Option<String>,
    #[serde(default)]
    cantidad_votos: Option<u64>,
    #[serde(default)]
    promedio_votos: Option<f64>,
    #[serde(default)]
    tmdb_id: Option<u64>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    genero: Option<Relation>,
    #[serde(default)]
    actors: Option<Relation>,
}

#[derive(Debug, Serialize)]
struct MoviePayload<'a> {
    titulo: &'a str,
    fecha_estreno: Option<&'a str>,
    cantidad_votos: u64,
    promedio_votos: f64,
    tmdb_id: u64,
    poster_path: Option<&'a str>,
    genero: &'a [u64],
    actors: &'a [u64],
}

impl<'a> From<&'a NewMovie> for MoviePayload<'a> {
    fn from(movie: &'a NewMovie) -> Self {
        Self {
            titulo: &movie.title,
            fecha_estreno: movie.release_date.as_deref(),
            cantidad_votos: movie.vote_count,
            promedio_votos: movie.vote_average,
            tmdb_id: movie.external_id,
            poster_path: movie.poster_url.as_deref(),
            genero: &movie.genre_ids,
            actors: &movie.actor_ids,
        }
    }
}

fn into_stored_movie(entry: Entry<MovieAttributes>) -> StoredMovie {
    let attributes = entry.attributes;
    StoredMovie {
        id: entry.id,
        title: attributes.titulo.unwrap_or_default(),
        release_date: attributes.fecha_estreno,
        vote_count: attributes.cantidad_votos,
        vote_average: attributes.promedio_votos,
        external_id: attributes.tmdb_id,
        poster_url: attributes.poster_path,
        genres: attributes
            .genero
            .unwrap_or_default()
            .into_named()
            .into_iter()
            .map(|(id, name)| StoredGenre { id, name })
            .collect(),
        actors: attributes
            .actors
            .unwrap_or_default()
            .into_named()
            .into_iter()
            .map(|(id, name)| StoredActor { id, name })
            .collect(),
    }
}

/// Strapi REST 客戶端，所有請求附帶 Bearer token
#[derive(Debug, Clone)]
pub struct StrapiClient {
    client: Client,
    base_url: String,
    token: String,
    genres_collection: String,
    actors_collection: String,
    movies_collection: String,
    page_size: usize,
}

impl StrapiClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &StoreConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            genres_collection: config.genres_collection.clone(),
            actors_collection: config.actors_collection.clone(),
            movies_collection: config.movies_collection.clone(),
            page_size: config.page_size,
        }
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn get(&self, collection: &str) -> RequestBuilder {
        self.client
            .get(self.url(collection))
            .bearer_auth(&self.token)
    }

    fn post(&self, collection: &str) -> RequestBuilder {
        self.client
            .post(self.url(collection))
            .bearer_auth(&self.token)
    }

    async fn list_named(&self, collection: &str, name: Option<&str>) -> Result<Vec<(u64, String)>> {
        let mut request = self
            .get(collection)
            .query(&[("pagination[pageSize]", self.page_size.to_string())]);
        if let Some(name) = name {
            request = request.query(&[("filters[nombre][$eq]", name)]);
        }

        let envelope: Envelope<Vec<Entry<NamedAttributes>>> =
            read_json(SERVICE, request.send().await?).await?;
        Ok(envelope
            .data
            .into_iter()
            .filter_map(Entry::into_named)
            .collect())
    }

    async fn create_named(&self, collection: &str, name: &str) -> Result<(u64, String)> {
        let response = self
            .post(collection)
            .json(&Payload {
                data: NamedPayload { nombre: name },
            })
            .send()
            .await?;

        let envelope: Envelope<Entry<NamedAttributes>> = read_json(SERVICE, response).await?;
        let created = envelope.data;
        Ok((
            created.id,
            created.attributes.nombre.unwrap_or_else(|| name.to_string()),
        ))
    }
}

#[async_trait]
impl ContentStore for StrapiClient {
    async fn list_genres(&self, name: Option<&str>) -> Result<Vec<StoredGenre>> {
        let genres = self.list_named(&self.genres_collection, name).await?;
        Ok(genres
            .into_iter()
            .map(|(id, name)| StoredGenre { id, name })
            .collect())
    }

    async fn create_genre(&self, name: &str) -> Result<StoredGenre> {
        let (id, name) = self.create_named(&self.genres_collection, name).await?;
        Ok(StoredGenre { id, name })
    }

    async fn list_actors(&self, name: &str) -> Result<Vec<StoredActor>> {
        let actors = self.list_named(&self.actors_collection, Some(name)).await?;
        Ok(actors
            .into_iter()
            .map(|(id, name)| StoredActor { id, name })
            .collect())
    }

    async fn create_actor(&self, name: &str) -> Result<StoredActor> {
        let (id, name) = self.create_named(&self.actors_collection, name).await?;
        Ok(StoredActor { id, name })
    }

    async fn find_movie_ids_by_external_id(&self, external_id: u64) -> Result<Vec<u64>> {
        let response = self
            .get(&self.movies_collection)
            .query(&[("filters[tmdb_id][$eq]", external_id.to_string())])
            .send()
            .await?;

        let envelope: Envelope<Vec<IdOnly>> = read_json(SERVICE, response).await?;
        Ok(envelope.data.into_iter().map(|e| e.id).collect())
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<u64> {
        let response = self
            .post(&self.movies_collection)
            .json(&Payload {
                data: MoviePayload::from(movie),
            })
            .send()
            .await?;

        let envelope: Envelope<IdOnly> = read_json(SERVICE, response).await?;
        Ok(envelope.data.id)
    }

    async fn list_movies_with_relations(&self) -> Result<Vec<StoredMovie>> {
        let response = self
            .get(&self.movies_collection)
            .query(&[("populate", "genero,actors")])
            .send()
            .await?;

        let envelope: Envelope<Vec<Entry<MovieAttributes>>> = read_json(SERVICE, response).await?;
        Ok(envelope.data.into_iter().map(into_stored_movie).collect())
    }

    async fn list_movie_ids(&self, page_size: usize) -> Result<Vec<u64>> {
        let response = self
            .get(&self.movies_collection)
            .query(&[
                ("pagination[page]", "1".to_string()),
                ("pagination[pageSize]", page_size.to_string()),
            ])
            .send()
            .await?;

        let envelope: Envelope<Vec<IdOnly>> = read_json(SERVICE, response).await?;
        Ok(envelope.data.into_iter().map(|e| e.id).collect())
    }

    async fn delete_movie(&self, id: u64) -> Result<()> {
        let url = format!("{}/{}", self.url(&self.movies_collection), id);
        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        ensure_success(SERVICE, response).await?;
        Ok(())
    }
}

//! In-memory ports used by the core unit tests.

use crate::domain::model::{
    CatalogActor, CatalogGenre, CatalogMovie, NewMovie, StoredActor, StoredGenre, StoredMovie,
};
use crate::domain::ports::{CatalogApi, ContentStore};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn genre(id: u64, name: &str) -> CatalogGenre {
    CatalogGenre {
        id,
        name: name.to_string(),
    }
}

pub fn movie(id: u64, title: &str, genre_ids: &[u64]) -> CatalogMovie {
    CatalogMovie {
        id,
        title: title.to_string(),
        release_date: Some("2025-05-01".to_string()),
        vote_count: 100,
        vote_average: 7.0,
        genre_ids: genre_ids.to_vec(),
        poster_path: Some(format!("/{}.jpg", id)),
    }
}

pub fn cast(names: &[&str]) -> Vec<CatalogActor> {
    names
        .iter()
        .enumerate()
        .map(|(order, name)| CatalogActor {
            name: name.to_string(),
            order: order as u32,
        })
        .collect()
}

#[derive(Default)]
pub struct FakeCatalog {
    pub genres: Option<Vec<CatalogGenre>>,
    pub movies: Option<Vec<CatalogMovie>>,
    pub credits: HashMap<u64, Vec<CatalogActor>>,
    pub genre_calls: AtomicUsize,
    pub credit_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(genres: Vec<CatalogGenre>, movies: Vec<CatalogMovie>) -> Self {
        Self {
            genres: Some(genres),
            movies: Some(movies),
            ..Default::default()
        }
    }

    pub fn with_credits(mut self, movie_id: u64, actors: Vec<CatalogActor>) -> Self {
        self.credits.insert(movie_id, actors);
        self
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_genres(&self) -> Result<Vec<CatalogGenre>> {
        self.genre_calls.fetch_add(1, Ordering::SeqCst);
        self.genres
            .clone()
            .ok_or_else(|| SyncError::upstream("TMDB", 503, "genres unavailable"))
    }

    async fn now_playing(&self, _page: u32) -> Result<Vec<CatalogMovie>> {
        self.movies
            .clone()
            .ok_or_else(|| SyncError::upstream("TMDB", 503, "now playing unavailable"))
    }

    async fn movie_credits(&self, movie_id: u64) -> Result<Vec<CatalogActor>> {
        self.credit_calls.fetch_add(1, Ordering::SeqCst);
        self.credits
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| SyncError::upstream("TMDB", 404, "credits unavailable"))
    }
}

#[derive(Default)]
struct StoreState {
    next_id: u64,
    genres: Vec<StoredGenre>,
    actors: Vec<StoredActor>,
    movies: Vec<(u64, NewMovie)>,
}

impl StoreState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct FakeStore {
    state: Mutex<StoreState>,
    pub failing_titles: HashSet<String>,
    pub fail_reads: bool,
    pub writes: AtomicUsize,
    pub genre_lookups: AtomicUsize,
    pub actor_lookups: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_movie(self, external_id: u64, title: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            state.movies.push((
                id,
                NewMovie {
                    title: title.to_string(),
                    release_date: None,
                    vote_count: 0,
                    vote_average: 0.0,
                    external_id,
                    poster_url: None,
                    genre_ids: vec![],
                    actor_ids: vec![],
                },
            ));
        }
        self
    }

    pub fn with_existing_genre(self, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            state.genres.push(StoredGenre {
                id,
                name: name.to_string(),
            });
        }
        self
    }

    pub fn failing_on(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn movies(&self) -> Vec<NewMovie> {
        self.state
            .lock()
            .unwrap()
            .movies
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .genres
            .iter()
            .map(|g| g.name.clone())
            .collect()
    }

    pub fn actor_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .actors
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn list_genres(&self, name: Option<&str>) -> Result<Vec<StoredGenre>> {
        self.genre_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(SyncError::upstream("Strapi", 500, "read failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .genres
            .iter()
            .filter(|g| name.map_or(true, |n| g.name == n))
            .cloned()
            .collect())
    }

    async fn create_genre(&self, name: &str) -> Result<StoredGenre> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let genre = StoredGenre {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.genres.push(genre.clone());
        Ok(genre)
    }

    async fn list_actors(&self, name: &str) -> Result<Vec<StoredActor>> {
        self.actor_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(SyncError::upstream("Strapi", 500, "read failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .actors
            .iter()
            .filter(|a| a.name == name)
            .cloned()
            .collect())
    }

    async fn create_actor(&self, name: &str) -> Result<StoredActor> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let actor = StoredActor {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.actors.push(actor.clone());
        Ok(actor)
    }

    async fn find_movie_ids_by_external_id(&self, external_id: u64) -> Result<Vec<u64>> {
        if self.fail_reads {
            return Err(SyncError::upstream("Strapi", 500, "read failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .movies
            .iter()
            .filter(|(_, m)| m.external_id == external_id)
            .map(|(id, _)| *id)
            .collect())
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<u64> {
        if self.failing_titles.contains(&movie.title) {
            return Err(SyncError::upstream("Strapi", 400, "validation failed"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.movies.push((id, movie.clone()));
        Ok(id)
    }

    async fn list_movies_with_relations(&self) -> Result<Vec<StoredMovie>> {
        if self.fail_reads {
            return Err(SyncError::upstream("Strapi", 500, "read failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .movies
            .iter()
            .map(|(id, m)| StoredMovie {
                id: *id,
                title: m.title.clone(),
                release_date: m.release_date.clone(),
                vote_count: Some(m.vote_count),
                vote_average: Some(m.vote_average),
                external_id: Some(m.external_id),
                poster_url: m.poster_url.clone(),
                genres: state
                    .genres
                    .iter()
                    .filter(|g| m.genre_ids.contains(&g.id))
                    .cloned()
                    .collect(),
                actors: state
                    .actors
                    .iter()
                    .filter(|a| m.actor_ids.contains(&a.id))
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn list_movie_ids(&self, page_size: usize) -> Result<Vec<u64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .movies
            .iter()
            .take(page_size)
            .map(|(id, _)| *id)
            .collect())
    }

    async fn delete_movie(&self, id: u64) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.movies.retain(|(movie_id, _)| *movie_id != id);
        Ok(())
    }
}

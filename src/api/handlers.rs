use crate::api::error::{ApiResult, ResultExt};
use crate::api::state::AppState;
use crate::domain::model::MovieView;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub message: String,
    pub saved: usize,
    pub duplicate: usize,
    pub failed: usize,
    pub total_movies_processed: usize,
}

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: usize,
}

/// POST /import
pub async fn import_movies(State(state): State<AppState>) -> ApiResult<Json<ImportResponse>> {
    let summary = state
        .importer
        .run()
        .await
        .context("Failed to import movies from TMDB into Strapi")?;

    Ok(Json(ImportResponse {
        message: summary.message(),
        saved: summary.saved,
        duplicate: summary.duplicate,
        failed: summary.failed,
        total_movies_processed: summary.total_movies_processed,
    }))
}

/// GET /movies?city=
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MoviesQuery>,
) -> ApiResult<Json<Vec<MovieView>>> {
    let movies = state
        .reader
        .list(query.city.as_deref())
        .await
        .context("Failed to fetch movies from Strapi")?;

    Ok(Json(movies))
}

/// DELETE /movies
pub async fn delete_movies(State(state): State<AppState>) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .purger
        .purge_all()
        .await
        .context("Failed to delete movies from Strapi")?;

    Ok(Json(DeleteResponse {
        message: format!("Deleted {} movies.", deleted),
        deleted,
    }))
}

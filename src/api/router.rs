use crate::api::{handlers, state::AppState};
use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/import", post(handlers::import_movies))
        .route(
            "/movies",
            get(handlers::list_movies).delete(handlers::delete_movies),
        )
        .layer(middleware::from_fn(answer_options))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CorsLayer 只處理 preflight；其餘 OPTIONS 也直接回 200，不落到 405
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod strapi;
pub mod tmdb;

pub use strapi::StrapiClient;
pub use tmdb::TmdbClient;

use crate::utils::error::{Result, SyncError};
use serde::de::DeserializeOwned;

/// 非 2xx 回應轉為 UpstreamError，並保留回應內容
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!("{} responded with {}: {}", service, status, body);
    Err(SyncError::upstream(service, status.as_u16(), body))
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T> {
    let body = ensure_success(service, response).await?.text().await?;
    // 2xx 但格式不符屬於資料錯誤，不是網路錯誤
    serde_json::from_str(&body).map_err(|e| {
        tracing::debug!("{} returned an unexpected body: {}", service, body);
        SyncError::from(e)
    })
}

pub mod actor_resolver;
pub mod cache;
pub mod genre_resolver;
pub mod importer;
pub mod purger;
pub mod reader;

#[cfg(test)]
pub(crate) mod fakes;

pub use crate::domain::model::{ImportSummary, MovieView};
pub use crate::domain::ports::{CatalogApi, ContentStore};
pub use crate::utils::error::Result;

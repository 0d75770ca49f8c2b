use serde::{Deserialize, Serialize};

/// TMDB 上映中清單的單筆電影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogGenre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogActor {
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredGenre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredActor {
    pub id: u64,
    pub name: String,
}

/// 寫入 Strapi 前的電影資料，關聯以 Strapi id 表示
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub release_date: Option<String>,
    pub vote_count: u64,
    pub vote_average: f64,
    pub external_id: u64,
    pub poster_url: Option<String>,
    pub genre_ids: Vec<u64>,
    pub actor_ids: Vec<u64>,
}

/// Strapi 中已儲存的電影，關聯已展開
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMovie {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_count: Option<u64>,
    pub vote_average: Option<f64>,
    pub external_id: Option<u64>,
    pub poster_url: Option<String>,
    pub genres: Vec<StoredGenre>,
    pub actors: Vec<StoredActor>,
}

/// 從 Strapi 讀回並攤平後的電影，鍵名與前端約定一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "fecha_estreno")]
    pub release_date: Option<String>,
    #[serde(rename = "cantidad_votos")]
    pub vote_count: Option<u64>,
    #[serde(rename = "promedio_votos")]
    pub vote_average: Option<f64>,
    #[serde(rename = "poster_path")]
    pub poster_url: Option<String>,
    #[serde(rename = "genero")]
    pub genres: Vec<String>,
    pub actors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub saved: usize,
    pub duplicate: usize,
    pub failed: usize,
    pub total_movies_processed: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        format!(
            "Import finished. {} new movies saved, {} already present, {} failed.",
            self.saved, self.duplicate, self.failed
        )
    }
}

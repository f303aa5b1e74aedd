use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text query as ingested, stored verbatim and immutable thereafter.
///
/// Query ids carry a `q-` prefix so they can never collide with team ids.
/// `source`, `url` and `comments_count` are optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuery {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub comments_count: u32,
}

/// Ingestion payload for a query. The repository assigns the prefixed id;
/// a missing timestamp defaults to the ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuery {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments_count: u32,
}

/// Derived query record. `clean_text` is the lower-cased title/content blob;
/// `keywords` is the skills subset of the extracted entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedQuery {
    pub id: String,
    pub clean_text: String,
    pub keywords: Vec<String>,
    pub embedding: Vec<f32>,
}

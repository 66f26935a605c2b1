use serde::{Deserialize, Deserializer, Serialize};

/// Number of places the web app asks for.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    /// Optional `lat,lng` the search should be biased to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
            limit: Some(DEFAULT_SEARCH_LIMIT),
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ResultSource>,
    // A response without results is an empty result list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<PlaceResult>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Cache,
    Api,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceResult {
    pub name           : String,
    pub address        : String,
    #[serde(default)]
    pub place_id       : Option<String>,
    #[serde(default)]
    pub lat            : Option<f64>,
    #[serde(default)]
    pub lng            : Option<f64>,
    /// URL for an embedded map viewer
    #[serde(default)]
    pub embed_src      : Option<String>,
    pub directions_url : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct LlmRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct LlmResponse {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Health {
    pub status: String,
    /// Unix timestamp in seconds
    pub time: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    /// HTTP status code
    pub http_status: u16,
    /// Error message
    pub message: String,
}

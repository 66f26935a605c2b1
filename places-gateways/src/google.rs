use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use serde::Deserialize;

use places_core::{entities::*, gateways::PlacesGateway};

use crate::Error;

pub const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const TIMEOUT: Duration = Duration::from_secs(15);

/// Places text search based on the Google Places API.
///
/// The gateway blocks the current thread while waiting for
/// the provider, so it must not be called within an async context.
#[derive(Debug, Clone)]
pub struct GooglePlaces {
    api_key: String,
    api_url: String,
}

impl GooglePlaces {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, TEXT_SEARCH_URL.to_string())
    }

    #[must_use]
    pub const fn with_api_url(api_key: String, api_url: String) -> Self {
        Self { api_key, api_url }
    }
}

impl PlacesGateway for GooglePlaces {
    fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>> {
        log::debug!("Requesting places for '{query}'");
        let client = Client::builder().timeout(TIMEOUT).build()?;
        let response = client
            .get(&self.api_url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()
            .map_err(Error::from)?;
        let response: TextSearchResponse = response.json()?;
        Ok(response.into_candidates()?)
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<TextSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TextSearchResult {
    name: Option<String>,
    formatted_address: Option<String>,
    place_id: Option<String>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl TextSearchResponse {
    fn into_candidates(self) -> Result<Vec<PlaceCandidate>, Error> {
        let Self {
            status,
            error_message,
            results,
        } = self;
        match status.as_deref() {
            None | Some("OK" | "ZERO_RESULTS") => {}
            Some(status) => {
                return Err(Error::ProviderStatus {
                    status: status.to_owned(),
                    message: error_message.unwrap_or_default(),
                });
            }
        }
        Ok(results.into_iter().map(Into::into).collect())
    }
}

impl From<TextSearchResult> for PlaceCandidate {
    fn from(from: TextSearchResult) -> Self {
        let TextSearchResult {
            name,
            formatted_address,
            place_id,
            geometry,
        } = from;
        let Location { lat, lng } = geometry.location;
        Self {
            name,
            formatted_address,
            place_id,
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<PlaceCandidate>, Error> {
        serde_json::from_str::<TextSearchResponse>(json)
            .unwrap()
            .into_candidates()
    }

    #[test]
    fn read_candidates_in_provider_order() {
        let json = r#"{
          "status": "OK",
          "results": [
            {
              "name": "ABC Cafe",
              "formatted_address": "Jl. X, Depok",
              "place_id": "ChIJ1",
              "geometry": { "location": { "lat": -6.4, "lng": 106.8 } },
              "rating": 4.5
            },
            {
              "name": "XYZ Coffee",
              "geometry": { "location": { "lat": -6.3, "lng": 106.7 } }
            }
          ]
        }"#;
        let candidates = parse(json).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name.as_deref(), Some("ABC Cafe"));
        assert_eq!(candidates[0].place_id.as_deref(), Some("ChIJ1"));
        assert_eq!(candidates[0].pos, MapPoint::from_lat_lng_deg(-6.4, 106.8));
        assert_eq!(candidates[1].formatted_address, None);
        assert_eq!(candidates[1].place_id, None);
    }

    #[test]
    fn accept_zero_results() {
        let candidates = parse(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn report_denied_requests() {
        let err = parse(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Places provider responded with REQUEST_DENIED: The provided API key is invalid."
        );
    }
}

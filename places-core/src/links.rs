use url::form_urlencoded;

use crate::entities::MapPoint;

const EMBED_BASE_URL: &str = "https://www.google.com/maps/embed/v1/place";
const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Builds the map related URLs of a place.
#[derive(Debug, Clone)]
pub struct MapLinks {
    api_key: String,
}

impl MapLinks {
    #[must_use]
    pub const fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// URL of an embeddable map that shows the place.
    #[must_use]
    pub fn embed_src(&self, place_id: &str) -> String {
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("key", &self.api_key)
            .append_pair("q", &format!("place_id:{place_id}"))
            .finish();
        format!("{EMBED_BASE_URL}?{params}")
    }
}

/// URL that opens driving directions to the given position.
#[must_use]
pub fn directions_url(pos: MapPoint) -> String {
    let MapPoint { lat, lng } = pos;
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("destination", &format!("{lat},{lng}"))
        .append_pair("travelmode", "driving")
        .finish();
    format!("{DIRECTIONS_BASE_URL}?{params}")
}

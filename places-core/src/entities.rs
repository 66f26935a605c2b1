/// A place as it is returned by the text search provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
    pub pos: MapPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A search result ready to be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub place_id: Option<String>,
    pub pos: MapPoint,
    pub embed_src: Option<String>,
    pub directions_url: String,
}

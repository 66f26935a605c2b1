pub use places_boundary::*;

use places_core::entities as e;

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn place_result(from: e::Place) -> PlaceResult {
        let e::Place {
            name,
            address,
            place_id,
            pos,
            embed_src,
            directions_url,
        } = from;
        PlaceResult {
            name,
            address,
            place_id,
            lat: Some(pos.lat),
            lng: Some(pos.lng),
            embed_src,
            directions_url,
        }
    }
}

//! Decisions of the search page that do not depend on the DOM.

use places_boundary::PlaceResult;
use places_core::query::Query;

/// What to do with a submitted search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Search for the trimmed query.
    Search(String),
    /// Warn about the empty input and do nothing else.
    EmptyQuery,
    /// A search is pending.
    Ignored,
}

#[must_use]
pub fn submission(loading: bool, text: &str) -> Submission {
    if loading {
        return Submission::Ignored;
    }
    match Query::parse(text) {
        Ok(query) => Submission::Search(query.into_string()),
        Err(_) => Submission::EmptyQuery,
    }
}

/// Embedded map of a result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEmbed {
    pub src: String,
    pub title: String,
}

/// Content of one result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub name: String,
    pub address: String,
    /// `None` if the place has no embeddable map.
    pub map: Option<MapEmbed>,
    pub directions_url: String,
}

impl From<PlaceResult> for ResultCard {
    fn from(from: PlaceResult) -> Self {
        let PlaceResult {
            name,
            address,
            embed_src,
            directions_url,
            ..
        } = from;
        let map = embed_src.map(|src| MapEmbed {
            src,
            title: name.clone(),
        });
        Self {
            name,
            address,
            map,
            directions_url,
        }
    }
}

/// One card per result in response order.
#[must_use]
pub fn place_cards(results: &[PlaceResult]) -> Vec<ResultCard> {
    results.iter().cloned().map(ResultCard::from).collect()
}

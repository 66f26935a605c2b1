use super::prelude::*;
use crate::refine::refine_query;

pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Query,
    /// Position (`lat,lng`) the search is biased to.
    pub location: Option<String>,
    pub limit: usize,
}

impl SearchParams {
    pub fn new(query: &str, location: Option<String>, limit: Option<usize>) -> Result<Self> {
        let query = Query::parse(query)?;
        let location = location.filter(|l| !l.trim().is_empty());
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        Ok(Self {
            query,
            location,
            limit,
        })
    }

    #[must_use]
    pub fn cache_key(&self) -> String {
        let Self {
            query,
            location,
            limit,
        } = self;
        let location = location.as_deref().unwrap_or_default();
        format!("places::{query}::{location}::{limit}")
    }
}

pub fn search_places<P, L>(
    places: &P,
    llm: &L,
    links: &MapLinks,
    params: &SearchParams,
) -> Result<Vec<Place>>
where
    P: PlacesGateway + ?Sized,
    L: LanguageModelGateway + ?Sized,
{
    let SearchParams {
        query,
        location,
        limit,
    } = params;
    let mut text = refine_query(llm, query);
    if let Some(location) = location {
        text = format!("{text} near {location}");
    }
    log::debug!("Search places for '{query}' with '{text}'");
    let places = places
        .text_search(&text)?
        .into_iter()
        .take(*limit)
        .map(|candidate| to_place(links, candidate))
        .collect();
    Ok(places)
}

fn to_place(links: &MapLinks, candidate: PlaceCandidate) -> Place {
    let PlaceCandidate {
        name,
        formatted_address,
        place_id,
        pos,
    } = candidate;
    let embed_src = place_id.as_deref().map(|id| links.embed_src(id));
    Place {
        name: name.unwrap_or_default(),
        address: formatted_address.unwrap_or_default(),
        place_id,
        pos,
        embed_src,
        directions_url: directions_url(pos),
    }
}

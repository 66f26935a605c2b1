use std::ops::RangeInclusive;

use crate::{gateways::LanguageModelGateway, query::Query};

const ACCEPTED_REFINED_LEN: RangeInclusive<usize> = 3..=200;

#[must_use]
pub fn refine_prompt(query: &Query) -> String {
    format!(
        "Normalize this user search to a concise Google Places query: \"{query}\". Output short phrase only."
    )
}

/// Pick the text that is sent to the places provider.
///
/// The refined text is only used if it has a reasonable length,
/// otherwise the user's query is kept as it is.
#[must_use]
pub fn select_query(query: &Query, refined: &str) -> String {
    let refined = refined.trim();
    let candidate = if refined.is_empty() {
        query.as_str()
    } else {
        refined
    };
    if ACCEPTED_REFINED_LEN.contains(&candidate.chars().count()) {
        candidate.to_owned()
    } else {
        query.as_str().to_owned()
    }
}

/// Ask the language model for a shorter version of the query.
///
/// Any failure of the model falls back to the original query.
pub fn refine_query<L>(llm: &L, query: &Query) -> String
where
    L: LanguageModelGateway + ?Sized,
{
    match llm.generate(&refine_prompt(query)) {
        Ok(refined) => select_query(query, &refined),
        Err(err) => {
            log::warn!("Unable to refine query '{query}': {err}");
            query.as_str().to_owned()
        }
    }
}

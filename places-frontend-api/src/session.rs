use std::fmt;

use places_boundary::{PlaceResult, SearchResponse};

use crate::{place_cards, Error, ResultCard};

/// Content of the status region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EmptyQuery,
    RequestFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => f.write_str("Please enter a search term."),
            Self::RequestFailed(reason) => write!(f, "Search failed: {reason}"),
        }
    }
}

/// Identifies one outbound search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request has been started in the meantime.
    Stale,
}

/// State of the search page.
///
/// Only the outcome of the most recently started request
/// is ever applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    latest: u64,
    loading: bool,
    results: Vec<PlaceResult>,
    notice: Option<Notice>,
}

impl SearchSession {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn results(&self) -> &[PlaceResult] {
        &self.results
    }

    #[must_use]
    pub fn cards(&self) -> Vec<ResultCard> {
        place_cards(&self.results)
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start a new request that supersedes all pending ones.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.notice = None;
        Ticket(self.latest)
    }

    #[must_use]
    pub const fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: std::result::Result<SearchResponse, Error>,
    ) -> Resolution {
        if !self.is_latest(ticket) {
            return Resolution::Stale;
        }
        self.loading = false;
        match result {
            Ok(SearchResponse { results, .. }) => {
                self.results = results;
            }
            Err(err) => {
                self.notice = Some(Notice::RequestFailed(err.to_string()));
            }
        }
        Resolution::Applied
    }

    pub fn warn_empty_query(&mut self) {
        self.notice = Some(Notice::EmptyQuery);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

use gloo_net::http::Request;
use web_sys::AbortSignal;

use places_boundary::{SearchRequest, SearchResponse};

use crate::{into_json, Result};

/// Public Places Finder API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Search places.
    ///
    /// The request is cancelled as soon as the given `signal` is aborted
    /// and then resolves with [`crate::Error::Aborted`].
    pub async fn search(
        &self,
        req: &SearchRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<SearchResponse> {
        let url = format!("{}/search", self.url);
        log::debug!("Search places: {:?}", req.query);
        let response = Request::post(&url)
            .abort_signal(signal)
            .json(req)?
            .send()
            .await?;
        into_json(response).await
    }
}

use std::sync::Arc;

use anyhow::anyhow;
use parking_lot::Mutex;
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use places_core::{entities::*, gateways::*};

use super::{Cfg, Gateways, InstanceOptions, RateLimits};

pub mod prelude {

    pub const DUMMY_API_KEY: &str = "dummy-key";

    pub use rocket::{
        http::ContentType,
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{candidate, default_cfg, rocket_test_setup, DummyLlm, DummyPlaces};
}

pub fn default_cfg() -> Cfg {
    Cfg {
        google_api_key: prelude::DUMMY_API_KEY.to_string(),
        cache_timeout: std::time::Duration::from_secs(300),
        rate_limits: RateLimits::default(),
    }
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    places: Arc<DummyPlaces>,
    llm: Arc<DummyLlm>,
) -> Client {
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let gateways = Gateways { places, llm };
    let rocket = super::rocket_instance(options, gateways);
    Client::tracked(rocket).unwrap()
}

pub fn candidate(name: &str, place_id: Option<&str>) -> PlaceCandidate {
    PlaceCandidate {
        name: Some(name.to_string()),
        formatted_address: Some(format!("{name} street")),
        place_id: place_id.map(ToString::to_string),
        pos: MapPoint::from_lat_lng_deg(-6.4, 106.8),
    }
}

#[derive(Default)]
pub struct DummyPlaces {
    pub candidates: Option<Vec<PlaceCandidate>>,
    pub queries: Mutex<Vec<String>>,
}

impl DummyPlaces {
    pub fn with(candidates: Vec<PlaceCandidate>) -> Arc<Self> {
        Arc::new(Self {
            candidates: Some(candidates),
            ..Default::default()
        })
    }
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl PlacesGateway for DummyPlaces {
    fn text_search(&self, query: &str) -> anyhow::Result<Vec<PlaceCandidate>> {
        self.queries.lock().push(query.to_string());
        self.candidates
            .clone()
            .ok_or_else(|| anyhow!("provider unavailable"))
    }
}

#[derive(Default)]
pub struct DummyLlm {
    pub answer: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl DummyLlm {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
            ..Default::default()
        })
    }
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl LanguageModelGateway for DummyLlm {
    fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().push(prompt.to_string());
        self.answer.clone().ok_or_else(|| anyhow!("model unavailable"))
    }
}

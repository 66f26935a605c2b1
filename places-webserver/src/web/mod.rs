use std::{net::SocketAddr, sync::Arc, time::Duration};

use rocket::{config::Config as RocketCfg, Rocket, Route};

use places_core::{
    gateways::{LanguageModelGateway, PlacesGateway},
    links::MapLinks,
    rate_limit::RateLimit,
};

pub mod api;
mod frontend;
mod guards;
mod rate_limiter;
mod search_cache;

#[cfg(test)]
pub mod tests;

use self::{rate_limiter::RateLimiter, search_cache::SearchCache};

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Key for the Maps Embed API
    pub google_api_key: String,
    /// How long search results are kept.
    pub cache_timeout: Duration,
    pub rate_limits: RateLimits,
}

/// Per client limits of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub default: RateLimit,
    pub search: RateLimit,
    pub llm: RateLimit,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            default: RateLimit::per_minute(60),
            search: RateLimit::per_minute(100),
            llm: RateLimit::per_minute(30),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

#[derive(Clone)]
pub(crate) struct Gateways {
    places: Arc<dyn PlacesGateway + Send + Sync>,
    llm: Arc<dyn LanguageModelGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, gateways: Gateways) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Cfg {
        google_api_key,
        cache_timeout,
        rate_limits,
    } = cfg;

    info!(
        "Search results are cached for {}s",
        cache_timeout.as_secs()
    );
    info!(
        "Rate limits: {} (default), {} (search), {} (llm)",
        rate_limits.default, rate_limits.search, rate_limits.llm
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(gateways)
        .manage(MapLinks::new(google_api_key))
        .manage(SearchCache::new(cache_timeout))
        .manage(RateLimiter::new(rate_limits));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/api", api::routes()),
        ("/", api::health_routes()),
        ("/", frontend::routes()),
    ]
}

pub async fn run(
    cfg: Cfg,
    address: SocketAddr,
    enable_cors: bool,
    places: Arc<dyn PlacesGateway + Send + Sync>,
    llm: Arc<dyn LanguageModelGateway + Send + Sync>,
) {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address.ip();
    rocket_cfg.port = address.port();

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let gateways = Gateways { places, llm };

    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Unable to enable CORS: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}

#[macro_use]
extern crate log;

use std::{net::SocketAddr, sync::Arc};

use places_core::gateways::{LanguageModelGateway, PlacesGateway};

mod adapters;
mod web;

pub use web::{Cfg, RateLimits};

pub async fn run(
    cfg: Cfg,
    address: SocketAddr,
    enable_cors: bool,
    places_gw: Arc<dyn PlacesGateway + Send + Sync>,
    llm_gw: Arc<dyn LanguageModelGateway + Send + Sync>,
) {
    web::run(cfg, address, enable_cors, places_gw, llm_gw).await;
}

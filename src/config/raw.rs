use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{net::IpAddr, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("places-finder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub search: Option<Search>,
    pub rate_limits: Option<RateLimits>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    #[serde(deserialize_with = "deserialize_duration")]
    pub cache_timeout: Duration,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RateLimits {
    pub default: String,
    pub search: String,
    pub llm: String,
}

impl Default for RateLimits {
    fn default() -> Self {
        Config::default()
            .rate_limits
            .expect("Rate limits configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
    pub ollama: Option<Ollama>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ollama {
    pub url: String,
    pub model: String,
}

impl Default for Ollama {
    fn default() -> Self {
        Gateway::default()
            .ollama
            .expect("Ollama gateway configuration")
    }
}

use anyhow::{anyhow, Result};
use places_core::rate_limit::RateLimit;
use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, SocketAddr},
    path::Path,
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "places-finder.toml";

const ENV_NAME_GOOGLE_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_OLLAMA_URL: &str = "OLLAMA_URL";
const ENV_NAME_OLLAMA_MODEL: &str = "OLLAMA_MODEL";
const ENV_NAME_PORT: &str = "PORT";
const ENV_NAME_RATE_LIMIT: &str = "RATE_LIMIT";
const ENV_NAME_CACHE_TIMEOUT_SECS: &str = "CACHE_TIMEOUT_SECS";

#[derive(Debug)]
pub struct Config {
    pub webserver: WebServer,
    pub search: Search,
    pub rate_limits: RateLimits,
    pub gateway: Gateway,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        Self::try_load(file_path, |name| env::var(name).ok())
    }

    fn try_load<P, E>(file_path: Option<P>, env_var: E) -> Result<Self>
    where
        P: AsRef<Path>,
        E: Fn(&str) -> Option<String>,
    {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(env_var)?;
        if cfg.gateway.google_api_key.is_none() {
            return Err(anyhow!(
                "Missing Google API key: set {ENV_NAME_GOOGLE_API_KEY}"
            ));
        }
        Ok(cfg)
    }

    fn apply_env_overrides<E>(&mut self, env_var: E) -> Result<()>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(key) = env_var(ENV_NAME_GOOGLE_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.gateway.google_api_key = Some(key);
        }
        if let Some(url) = env_var(ENV_NAME_OLLAMA_URL) {
            self.gateway.ollama_url = url;
        }
        if let Some(model) = env_var(ENV_NAME_OLLAMA_MODEL) {
            self.gateway.ollama_model = model;
        }
        if let Some(port) = env_var(ENV_NAME_PORT) {
            self.webserver.port = port
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        if let Some(limit) = env_var(ENV_NAME_RATE_LIMIT) {
            self.rate_limits.default = limit
                .parse()
                .map_err(|err| anyhow!("{ENV_NAME_RATE_LIMIT}: {err}"))?;
        }
        if let Some(secs) = env_var(ENV_NAME_CACHE_TIMEOUT_SECS) {
            let secs: u64 = secs
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_CACHE_TIMEOUT_SECS} '{secs}': {err}"))?;
            self.search.cache_timeout = Duration::from_secs(secs);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl WebServer {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

#[derive(Debug)]
pub struct Search {
    pub cache_timeout: Duration,
}

#[derive(Debug)]
pub struct RateLimits {
    pub default: RateLimit,
    pub search: RateLimit,
    pub llm: RateLimit,
}

#[derive(Debug)]
pub struct Gateway {
    pub google_api_key: Option<String>,
    pub ollama_url: String,
    pub ollama_model: String,
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            search,
            rate_limits,
            gateway,
        } = from;

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Search { cache_timeout } = search.unwrap_or_default();
        let search = Search { cache_timeout };

        let raw::RateLimits {
            default,
            search: search_limit,
            llm,
        } = rate_limits.unwrap_or_default();
        let parse_limit = |name: &str, value: String| -> Result<RateLimit> {
            value
                .parse()
                .map_err(|err| anyhow!("rate-limits.{name}: {err}"))
        };
        let rate_limits = RateLimits {
            default: parse_limit("default", default)?,
            search: parse_limit("search", search_limit)?,
            llm: parse_limit("llm", llm)?,
        };

        let raw::Gateway { google, ollama } = gateway.unwrap_or_default();
        let raw::Google { api_key } = google.unwrap_or_default();
        let raw::Ollama { url, model } = ollama.unwrap_or_default();
        let gateway = Gateway {
            google_api_key: api_key.filter(|k| !k.trim().is_empty()),
            ollama_url: url,
            ollama_model: model,
        };

        Ok(Self {
            webserver,
            search,
            rate_limits,
            gateway,
        })
    }
}

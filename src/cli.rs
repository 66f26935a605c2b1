use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};
use clap::Parser;

use places_gateways::{google::GooglePlaces, ollama::Ollama};

use crate::config::Config;

/// Search places with an LLM refined query.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set the port to listen
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

fn apply_overrides(cfg: &mut Config, args: &Args) {
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    apply_overrides(&mut cfg, &args);

    let Config {
        webserver,
        search,
        rate_limits,
        gateway,
    } = cfg;

    let api_key = gateway
        .google_api_key
        .ok_or_else(|| anyhow!("Missing Google API key"))?;
    log::info!(
        "Use Ollama model '{}' at {}",
        gateway.ollama_model,
        gateway.ollama_url
    );
    let places_gw = Arc::new(GooglePlaces::new(api_key.clone()));
    let llm_gw = Arc::new(Ollama::new(gateway.ollama_url, gateway.ollama_model));

    let web_cfg = places_webserver::Cfg {
        google_api_key: api_key,
        cache_timeout: search.cache_timeout,
        rate_limits: places_webserver::RateLimits {
            default: rate_limits.default,
            search: rate_limits.search,
            llm: rate_limits.llm,
        },
    };
    places_webserver::run(
        web_cfg,
        webserver.socket_addr(),
        webserver.enable_cors,
        places_gw,
        llm_gw,
    )
    .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::parse_from(["places-finder", "-p", "8080", "--enable-cors"]);
        assert_eq!(args.port, Some(8080));
        assert!(args.enable_cors);
        assert!(args.config.is_none());

        let args = Args::parse_from(["places-finder", "--config", "custom.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.port, None);
        assert!(!args.enable_cors);
    }

    #[test]
    fn enable_cors_from_command_line() {
        let mut cfg = Config::default();
        assert!(!cfg.webserver.enable_cors);

        apply_overrides(&mut cfg, &Args::parse_from(["places-finder"]));
        assert!(!cfg.webserver.enable_cors);

        let args = Args::parse_from(["places-finder", "--enable-cors", "-p", "9000"]);
        apply_overrides(&mut cfg, &args);
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.webserver.port, 9000);
    }
}

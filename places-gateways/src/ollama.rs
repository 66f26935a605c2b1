use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use places_core::gateways::LanguageModelGateway;

use crate::Error;

pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Text generation with a local Ollama instance.
///
/// Like [`crate::google::GooglePlaces`] this gateway blocks.
#[derive(Debug, Clone)]
pub struct Ollama {
    url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

impl Ollama {
    #[must_use]
    pub const fn new(url: String, model: String) -> Self {
        Self { url, model }
    }
}

impl Default for Ollama {
    fn default() -> Self {
        Self::new(DEFAULT_URL.to_string(), DEFAULT_MODEL.to_string())
    }
}

impl LanguageModelGateway for Ollama {
    fn generate(&self, prompt: &str) -> Result<String> {
        let client = Client::builder().timeout(TIMEOUT).build()?;
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        let response = client
            .post(&self.url)
            .json(&request)
            .send()?
            .error_for_status()
            .map_err(Error::from)?;
        let json: Value = response.json()?;
        Ok(extract_text(json))
    }
}

// The response shape differs between model servers.
fn extract_text(json: Value) -> String {
    for key in ["response", "text"] {
        match json.get(key) {
            Some(Value::String(text)) => return text.clone(),
            // No usable answer: let the caller fall back.
            Some(_) => return String::new(),
            None => {}
        }
    }
    if let Some(first) = json
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        return first
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
    }
    json.to_string()
}

pub mod google;
pub mod ollama;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Places provider responded with {status}: {message}")]
    ProviderStatus { status: String, message: String },
}

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;
mod session;
mod view_model;

pub use self::{public::*, session::*, view_model::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    /// The request was aborted because a newer one superseded it.
    #[error("request aborted")]
    Aborted,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Api(#[from] places_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(err) if err.name == "AbortError" => Self::Aborted,
            gloo_net::Error::SerdeError(err) => Self::InvalidResponse(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let ok = response.ok();
    let status_text = response.status_text();
    let body = response.text().await?;
    parse_body(ok, status, &status_text, &body)
}

fn parse_body<T>(ok: bool, status: u16, status_text: &str, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if ok {
        serde_json::from_str(body).map_err(|err| Error::InvalidResponse(err.to_string()))
    } else {
        let err = serde_json::from_str::<places_boundary::Error>(body).unwrap_or_else(|_| {
            places_boundary::Error {
                http_status: status,
                message: if status_text.is_empty() {
                    format!("HTTP status {status}")
                } else {
                    format!("HTTP status {status} ({status_text})")
                },
            }
        });
        Err(err.into())
    }
}

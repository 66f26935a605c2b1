use std::{fmt::Display, result};

use places_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, search_cache::SearchCache, Gateways};
use crate::adapters::json::{self, to_json};
use places_core::{links::MapLinks, usecases};

mod error;
mod health;
mod llm;
mod search;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   search   --- //
        search::post_search,
        // ---   llm   --- //
        llm::post_llm,
    ]
}

pub fn health_routes() -> Vec<Route> {
    routes![health::get_health]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Run a blocking gateway call outside of the async executor.
async fn run_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, usecases::Error> + Send + 'static,
    T: Send + 'static,
{
    let result = rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(err.into()))?;
    Ok(result?)
}

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::rate_limiter::{RateLimiter, Scope};

// Requests without a known peer address share one quota.
const UNKNOWN_CLIENT: &str = "unknown";

fn check_quota(request: &Request<'_>, limiter: &RateLimiter, scope: Scope) -> Outcome<(), ()> {
    let client = request
        .client_ip()
        .map_or_else(|| UNKNOWN_CLIENT.to_string(), |ip| ip.to_string());
    if limiter.check(scope, &client) {
        Outcome::Success(())
    } else {
        warn!(
            "Rate limit of {} exceeded by {client} ({scope:?})",
            limiter.limit(scope)
        );
        Outcome::Error((Status::TooManyRequests, ()))
    }
}

async fn quota(request: &Request<'_>, scope: Scope) -> Outcome<(), ()> {
    let limiter = try_outcome!(request.guard::<&State<RateLimiter>>().await);
    check_quota(request, limiter, scope)
}

/// Admits requests within the default rate limit.
pub struct DefaultQuota;

/// Admits requests within the rate limit of the search endpoint.
pub struct SearchQuota;

/// Admits requests within the rate limit of the language model endpoint.
pub struct LlmQuota;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for DefaultQuota {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        quota(request, Scope::Default).await.map(|()| Self)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SearchQuota {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        quota(request, Scope::Search).await.map(|()| Self)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for LlmQuota {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        quota(request, Scope::Llm).await.map(|()| Self)
    }
}

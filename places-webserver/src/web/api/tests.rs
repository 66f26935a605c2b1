use std::sync::Arc;

use super::*;
use crate::web::{tests::prelude::*, Cfg, RateLimits};
use places_core::rate_limit::RateLimit;

fn test_json(r: &LocalResponse) {
    assert_eq!(
        r.headers().get("Content-Type").collect::<Vec<_>>()[0],
        "application/json"
    );
}

fn setup(places: Arc<DummyPlaces>, llm: Arc<DummyLlm>) -> Client {
    setup_with_cfg(default_cfg(), places, llm)
}

fn setup_with_cfg(cfg: Cfg, places: Arc<DummyPlaces>, llm: Arc<DummyLlm>) -> Client {
    rocket_test_setup(
        vec![("/api", routes()), ("/", health_routes())],
        cfg,
        places,
        llm,
    )
}

fn post_search<'a>(client: &'a Client, body: &'static str) -> LocalResponse<'a> {
    client
        .post("/api/search")
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
}

fn error_of(res: LocalResponse) -> json::Error {
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

#[test]
fn search_places() {
    let places = DummyPlaces::with(vec![candidate("ABC Cafe", Some("ChIJ1"))]);
    let llm = DummyLlm::answering("24h cafe Depok");
    let client = setup(places.clone(), llm.clone());
    let res = post_search(&client, r#"{"query":"24h cafe in Depok","limit":5}"#);
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let res: json::SearchResponse = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(res.source, Some(json::ResultSource::Api));
    assert_eq!(res.results.len(), 1);
    let place = &res.results[0];
    assert_eq!(place.name, "ABC Cafe");
    assert_eq!(place.address, "ABC Cafe street");
    assert_eq!(place.place_id.as_deref(), Some("ChIJ1"));
    assert_eq!(
        place.embed_src.as_deref(),
        Some("https://www.google.com/maps/embed/v1/place?key=dummy-key&q=place_id%3AChIJ1")
    );
    assert_eq!(
        place.directions_url,
        "https://www.google.com/maps/dir/?api=1&destination=-6.4%2C106.8&travelmode=driving"
    );
    assert_eq!(*places.queries.lock(), vec!["24h cafe Depok".to_string()]);
    assert_eq!(llm.prompts.lock().len(), 1);
}

#[test]
fn search_near_location() {
    let places = DummyPlaces::with(vec![]);
    let client = setup(places.clone(), DummyLlm::failing());
    let res = post_search(&client, r#"{"query":"bakery","location":"-6.4,106.8"}"#);
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        *places.queries.lock(),
        vec!["bakery near -6.4,106.8".to_string()]
    );
}

#[test]
fn search_with_default_limit() {
    let places = DummyPlaces::with(
        (0..8)
            .map(|i| candidate(&format!("Place {i}"), None))
            .collect(),
    );
    let client = setup(places, DummyLlm::failing());
    let res = post_search(&client, r#"{"query":"bakery"}"#);
    let res: json::SearchResponse = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(res.results.len(), 5);
    assert_eq!(res.results[4].name, "Place 4");
    assert_eq!(res.results[0].embed_src, None);
}

#[test]
fn reject_search_without_query() {
    let places = DummyPlaces::with(vec![]);
    let client = setup(places.clone(), DummyLlm::failing());
    for body in [r#"{}"#, r#"{"query":""}"#, r#"{"query":"   ","limit":5}"#] {
        let res = post_search(&client, body);
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);
        let err = error_of(res);
        assert_eq!(err.http_status, 400);
        assert_eq!(err.message, "missing query");
    }
    assert!(places.queries.lock().is_empty());
}

#[test]
fn reject_malformed_search_request() {
    let client = setup(DummyPlaces::with(vec![]), DummyLlm::failing());
    let res = post_search(&client, r#"{"query":42}"#);
    assert_eq!(res.status(), Status::UnprocessableEntity);
}

#[test]
fn answer_repeated_search_from_cache() {
    let places = DummyPlaces::with(vec![candidate("A", Some("a"))]);
    let client = setup(places.clone(), DummyLlm::failing());
    let body = r#"{"query":"cafe","limit":5}"#;
    let first: json::SearchResponse =
        serde_json::from_str(&post_search(&client, body).into_string().unwrap()).unwrap();
    let second: json::SearchResponse =
        serde_json::from_str(&post_search(&client, body).into_string().unwrap()).unwrap();
    assert_eq!(first.source, Some(json::ResultSource::Api));
    assert_eq!(second.source, Some(json::ResultSource::Cache));
    assert_eq!(first.results, second.results);
    assert_eq!(places.queries.lock().len(), 1);

    // another limit is another search
    let third: json::SearchResponse = serde_json::from_str(
        &post_search(&client, r#"{"query":"cafe","limit":1}"#)
            .into_string()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(third.source, Some(json::ResultSource::Api));
    assert_eq!(places.queries.lock().len(), 2);
}

#[test]
fn do_not_cache_empty_results() {
    let places = DummyPlaces::with(vec![]);
    let client = setup(places.clone(), DummyLlm::failing());
    post_search(&client, r#"{"query":"nothing"}"#);
    post_search(&client, r#"{"query":"nothing"}"#);
    assert_eq!(places.queries.lock().len(), 2);
}

#[test]
fn report_provider_failure() {
    let client = setup(DummyPlaces::failing(), DummyLlm::failing());
    let res = post_search(&client, r#"{"query":"cafe"}"#);
    assert_eq!(res.status(), Status::InternalServerError);
    test_json(&res);
    let err = error_of(res);
    assert_eq!(err.http_status, 500);
    assert_eq!(err.message, "provider unavailable");
}

#[test]
fn generate_text() {
    let llm = DummyLlm::answering("Hello!");
    let client = setup(DummyPlaces::failing(), llm.clone());
    let res = client
        .post("/api/llm")
        .header(ContentType::JSON)
        .body(r#"{"prompt":"Say hello"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let res: json::LlmResponse = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(res.text, "Hello!");
    assert_eq!(*llm.prompts.lock(), vec!["Say hello".to_string()]);
}

#[test]
fn reject_empty_prompt() {
    let client = setup(DummyPlaces::failing(), DummyLlm::answering("x"));
    let res = client
        .post("/api/llm")
        .header(ContentType::JSON)
        .body(r#"{}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert_eq!(error_of(res).message, "missing prompt");
}

#[test]
fn report_model_failure() {
    let client = setup(DummyPlaces::failing(), DummyLlm::failing());
    let res = client
        .post("/api/llm")
        .header(ContentType::JSON)
        .body(r#"{"prompt":"Say hello"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    assert_eq!(error_of(res).message, "model unavailable");
}

#[test]
fn health_check() {
    let client = setup(DummyPlaces::failing(), DummyLlm::failing());
    let res = client.get("/health").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let health: json::Health = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.time > 0);
}

#[test]
fn limit_search_requests() {
    let cfg = Cfg {
        rate_limits: RateLimits {
            search: RateLimit::per_minute(2),
            ..RateLimits::default()
        },
        ..default_cfg()
    };
    let places = DummyPlaces::with(vec![]);
    let client = setup_with_cfg(cfg, places.clone(), DummyLlm::failing());
    assert_eq!(
        post_search(&client, r#"{"query":"a"}"#).status(),
        Status::Ok
    );
    assert_eq!(
        post_search(&client, r#"{"query":"b"}"#).status(),
        Status::Ok
    );
    assert_eq!(
        post_search(&client, r#"{"query":"c"}"#).status(),
        Status::TooManyRequests
    );
    assert_eq!(places.queries.lock().len(), 2);
    // other endpoints have their own limits
    assert_eq!(client.get("/health").dispatch().status(), Status::Ok);
}

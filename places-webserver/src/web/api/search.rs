use super::*;

#[post("/search", data = "<req>")]
pub async fn post_search(
    _quota: SearchQuota,
    gateways: &State<Gateways>,
    links: &State<MapLinks>,
    cache: &State<SearchCache>,
    req: JsonResult<'_, json::SearchRequest>,
) -> Result<json::SearchResponse> {
    let json::SearchRequest {
        query,
        location,
        limit,
    } = req?.into_inner();
    let params = usecases::SearchParams::new(&query, location, limit)?;

    let cache_key = params.cache_key();
    if let Some(results) = cache.get(&cache_key) {
        debug!("Found cached results for {cache_key}");
        return Ok(Json(json::SearchResponse {
            source: Some(json::ResultSource::Cache),
            results,
        }));
    }

    let Gateways { places, llm } = gateways.inner().clone();
    let links = links.inner().clone();
    let places = run_blocking(move || {
        usecases::search_places(&*places, &*llm, &links, &params)
    })
    .await?;
    let results: Vec<_> = places.into_iter().map(to_json::place_result).collect();

    // Empty answers are not worth caching.
    if !results.is_empty() {
        cache.insert(cache_key, results.clone());
    }
    Ok(Json(json::SearchResponse {
        source: Some(json::ResultSource::Api),
        results,
    }))
}

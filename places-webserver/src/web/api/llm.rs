use super::*;

#[post("/llm", data = "<req>")]
pub async fn post_llm(
    _quota: LlmQuota,
    gateways: &State<Gateways>,
    req: JsonResult<'_, json::LlmRequest>,
) -> Result<json::LlmResponse> {
    let json::LlmRequest { prompt } = req?.into_inner();
    let llm = gateways.llm.clone();
    let text = run_blocking(move || usecases::generate_text(&*llm, &prompt)).await?;
    Ok(Json(json::LlmResponse { text }))
}

use time::OffsetDateTime;

use super::*;

#[get("/health")]
pub fn get_health(_quota: DefaultQuota) -> Json<json::Health> {
    Json(json::Health {
        status: "ok".to_string(),
        time: OffsetDateTime::now_utc().unix_timestamp(),
    })
}

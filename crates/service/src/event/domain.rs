use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `PUT /events/{id}`.
///
/// `id` is accepted for symmetry with the response but the path id wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub date: NaiveDate,
    pub url: String,
    pub city_id: i64,
}

use axum::{
    extract::{OriginalUri, Path, State},
    Json,
};
use models::event;
use service::event::EventInput;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    put, path = "/events/{id}", tag = "events",
    params(("id" = i64, Path, description = "Event id")),
    request_body = crate::openapi::EventDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EventDoc),
        (status = 404, description = "Event or city not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    Json(input): Json<EventInput>,
) -> Result<Json<event::Model>, JsonApiError> {
    let updated = state
        .events
        .update(id, input)
        .await
        .map_err(|e| JsonApiError::from(e).with_path(uri.path()))?;
    Ok(Json(updated))
}

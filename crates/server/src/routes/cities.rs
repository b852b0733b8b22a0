use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use models::city;
use service::city::CityInput;
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/cities", tag = "cities",
    responses((status = 200, description = "All cities sorted by name", body = [crate::openapi::CityDoc]))
)]
pub async fn find_all(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<city::Model>>, JsonApiError> {
    let list = state
        .cities
        .find_all()
        .await
        .map_err(|e| JsonApiError::from(e).with_path(uri.path()))?;
    info!(count = list.len(), "list cities");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/cities", tag = "cities",
    request_body = crate::openapi::CityInputDoc,
    responses((status = 201, description = "Created", body = crate::openapi::CityDoc))
)]
pub async fn insert(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    Json(input): Json<CityInput>,
) -> Result<impl IntoResponse, JsonApiError> {
    let created = state
        .cities
        .insert(input)
        .await
        .map_err(|e| JsonApiError::from(e).with_path(uri.path()))?;
    let location = format!("/cities/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    delete, path = "/cities/{id}", tag = "cities",
    params(("id" = i64, Path, description = "City id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "City has events or integrity failure"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state
        .cities
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from(e).with_path(uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

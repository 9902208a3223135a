use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::person::{Person, PersonInput};
use serde::Deserialize;
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to match; omitted matches every person.
    pub name: Option<String>,
}

#[utoipa::path(
    get, path = "/persons", tag = "persons",
    responses(
        (status = 200, description = "All persons", body = [crate::openapi::PersonDoc]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Person>>, JsonApiError> {
    Ok(Json(state.persons.list().await?))
}

#[utoipa::path(
    get, path = "/persons/{id}", tag = "persons",
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PersonDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Person>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.persons.get(id).await?))
}

#[utoipa::path(
    get, path = "/persons/search", tag = "persons",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching persons", body = [crate::openapi::PersonDoc]),
        (status = 500, description = "Database error")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<Person>>, JsonApiError> {
    let found = state.persons.search(q.name.as_deref()).await?;
    info!(count = found.len(), "search persons");
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/persons", tag = "persons",
    request_body = crate::openapi::PersonInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PersonDoc),
        (status = 422, description = "Missing or mistyped field"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<PersonInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), JsonApiError> {
    let Json(input) = input?;
    let created = state.persons.create(input).await?;
    info!(id = created.id, "created person");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/persons/{id}", tag = "persons",
    params(("id" = i32, Path, description = "Person ID")),
    request_body = crate::openapi::PersonInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PersonDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let updated = state.persons.update(id, input).await?;
    info!(id, "updated person");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/persons/{id}", tag = "persons",
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.persons.delete(id).await?;
    info!(id, "deleted person");
    Ok(StatusCode::NO_CONTENT)
}

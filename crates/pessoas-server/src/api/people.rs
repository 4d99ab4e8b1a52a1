// ABOUTME: Person CRUD API handlers for listing, creating, updating, and deleting records.
// ABOUTME: Each handler runs one blocking store call off the async reactor and maps errors to JSON.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pessoas_core::{City, Person, PersonFields, Profession};
use pessoas_store::{RecordStore, StoreError};
use serde::Serialize;

use crate::app_state::SharedState;

/// Selectable values for the enumerated fields.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub cities: Vec<&'static str>,
    pub professions: Vec<&'static str>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}

fn store_error_response(err: StoreError) -> Response {
    if err.is_validation() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string());
    }
    tracing::error!("store operation failed: {}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Run a store operation on the blocking pool.
async fn with_store<T, F>(state: &SharedState, op: F) -> Result<T, Response>
where
    F: FnOnce(&RecordStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || op(&store)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(store_error_response(err)),
        Err(err) => {
            tracing::error!("store task panicked or was cancelled: {}", err);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store task failed",
            ))
        }
    }
}

fn parse_id(id: &str) -> Result<i64, Response> {
    id.parse::<i64>()
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "invalid person id"))
}

/// GET /api/options - List the accepted cities and professions.
pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        cities: City::ALL.iter().map(City::as_str).collect(),
        professions: Profession::ALL.iter().map(Profession::as_str).collect(),
    })
}

/// GET /api/people - List all people in storage order.
pub async fn list_people(State(state): State<SharedState>) -> Response {
    match with_store(&state, |store| store.list()).await {
        Ok(people) => Json::<Vec<Person>>(people).into_response(),
        Err(resp) => resp,
    }
}

/// POST /api/people - Insert a new person.
pub async fn create_person(
    State(state): State<SharedState>,
    Json(fields): Json<PersonFields>,
) -> Response {
    match with_store(&state, move |store| store.insert(&fields)).await {
        Ok(id) => (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response(),
        Err(resp) => resp,
    }
}

/// PUT /api/people/{id} - Overwrite all fields of a person. Unknown ids are ignored.
pub async fn update_person(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(fields): Json<PersonFields>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match with_store(&state, move |store| store.update(id, &fields)).await {
        Ok(()) => Json(serde_json::json!({ "status": "updated" })).into_response(),
        Err(resp) => resp,
    }
}

/// DELETE /api/people/{id} - Remove a person. Unknown ids are ignored.
pub async fn delete_person(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match with_store(&state, move |store| store.delete(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(resp) => resp,
    }
}

//! Resource CRUD handlers: list, read, create, update, delete.

use crate::config::Resource;
use crate::error::AppError;
use crate::response::{confirmation, created, not_found, ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
};
use serde_json::{Map, Value};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// Content-Type is not checked. An empty body is an empty object, so every column binds NULL.
fn parse_body(raw: &[u8]) -> Result<Map<String, Value>, AppError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| AppError::BadRequest(format!("malformed JSON body: {}", e)))?;
    body_to_map(value)
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn resource<'a>(state: &'a AppState, path_segment: &str) -> Result<&'a Resource, AppError> {
    state
        .catalog
        .resource_by_path(path_segment)
        .ok_or_else(|| AppError::NotFound(path_segment.to_string()))
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<Response, AppError> {
    let resource = resource(&state, &path_segment)?;
    let rows = CrudService::list(&state.pool, resource).await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let resource = resource(&state, &path_segment)?;
    let id = parse_id(&id_str)?;
    Ok(match CrudService::read(&state.pool, resource, id).await? {
        Some(row) => ok(row),
        None => not_found(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let resource = resource(&state, &path_segment)?;
    let body = parse_body(&body)?;
    let row = CrudService::create(&state.pool, resource, &body).await?;
    tracing::info!(table = resource.table_name, row = %row, "created");
    Ok(created(row))
}

/// Full replace; the row's existence is not checked (MySQL reports zero affected rows when
/// nothing changed).
pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, AppError> {
    let resource = resource(&state, &path_segment)?;
    let id = parse_id(&id_str)?;
    let body = parse_body(&body)?;
    CrudService::update(&state.pool, resource, id, &body).await?;
    Ok(confirmation(resource.updated_message))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let resource = resource(&state, &path_segment)?;
    let id = parse_id(&id_str)?;
    if CrudService::delete(&state.pool, resource, id).await? == 0 {
        return Ok(not_found());
    }
    Ok(confirmation(resource.deleted_message))
}

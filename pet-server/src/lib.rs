use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub mod config;

pub const PET_PATH: &str = "/api/pet";

/// Response body shared by every verb.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
    pub method: String,
    pub status: String,
    pub data: Value,
}

impl Envelope {
    fn new(method: &str, status: &str, data: Value) -> Self {
        let envelope = Self {
            message: format!("{method} request received"),
            method: method.to_string(),
            status: status.to_string(),
            data,
        };
        tracing::debug!(method, status, "envelope built");
        envelope
    }
}

pub fn app() -> Router {
    Router::new()
        .route(
            PET_PATH,
            get(get_pet)
                .post(create_pet)
                .put(replace_pet)
                .patch(patch_pet)
                .delete(delete_pet),
        )
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Like `run`, but stops accepting connections once `shutdown` resolves.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Object-spread `body` between `head` and `tail`: body fields override head
/// fields, tail fields override both.
fn splice(head: Map<String, Value>, body: Map<String, Value>, tail: Map<String, Value>) -> Value {
    let mut data = head;
    data.extend(body);
    data.extend(tail);
    Value::Object(data)
}

/// Own enumerable fields of `value` under object spread: an object's entries,
/// one indexed field per array element or string character, nothing for
/// numbers, booleans and null.
fn spread(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Number(_) | Value::Bool(_) | Value::Null => Map::new(),
    }
}

/// Request body that does not parse as JSON.
#[derive(Debug)]
pub struct MalformedBody(serde_json::Error);

impl IntoResponse for MalformedBody {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "malformed request body");
        (StatusCode::BAD_REQUEST, format!("malformed JSON body: {}", self.0)).into_response()
    }
}

/// Parse the raw body as JSON whatever the request's content type says.
fn parse_body(body: &Bytes) -> Result<Value, MalformedBody> {
    serde_json::from_slice(body).map_err(MalformedBody)
}

async fn get_pet() -> Json<Envelope> {
    Json(Envelope::new(
        "GET",
        "success",
        json!({
            "id": 1,
            "name": "Happy Pet",
            "type": "GET-animal",
            "mood": "joyful",
        }),
    ))
}

async fn create_pet(body: Bytes) -> Result<(StatusCode, Json<Envelope>), MalformedBody> {
    let body = parse_body(&body)?;
    let id = (Uuid::new_v4().as_u128() % 1000) as u64;
    let data = splice(
        spread(json!({ "id": id })),
        spread(body),
        spread(json!({ "createdAt": now() })),
    );
    Ok((StatusCode::CREATED, Json(Envelope::new("POST", "created", data))))
}

async fn replace_pet(body: Bytes) -> Result<Json<Envelope>, MalformedBody> {
    let body = parse_body(&body)?;
    let data = splice(
        spread(json!({ "id": 1 })),
        spread(body),
        spread(json!({ "updatedAt": now(), "replaced": true })),
    );
    Ok(Json(Envelope::new("PUT", "updated", data)))
}

async fn patch_pet(body: Bytes) -> Result<Json<Envelope>, MalformedBody> {
    let body = parse_body(&body)?;
    Ok(Json(Envelope::new(
        "PATCH",
        "partially updated",
        json!({
            "id": 1,
            "changes": body,
            "updatedAt": now(),
        }),
    )))
}

async fn delete_pet() -> Json<Envelope> {
    Json(Envelope::new("DELETE", "deleted", Value::Null))
}

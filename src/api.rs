use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::data::query::{self, HealthReport};
use crate::state::AppState;
use crate::ui::page;

// API types
#[derive(Debug, Serialize)]
pub struct SoundsResponse {
    pub sounds: Vec<String>,
}

/// Body of `POST /get_call_for`. Absent or non-string values never match a record.
#[derive(Debug, Deserialize)]
pub struct CallForRequest {
    pub animal: Option<Value>,
    pub sound: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CallForResponse {
    pub call_for: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/get_sounds/:animal", get(get_sounds))
        .route("/get_call_for", post(get_call_for))
        .route("/health", get(health))
        .route("/static/js/main.js", get(main_js))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(page::index_page(&query::animals(&state.table)))
}

async fn get_sounds(
    Path(animal): Path<String>,
    State(state): State<AppState>,
) -> Json<SoundsResponse> {
    Json(SoundsResponse {
        sounds: query::sounds_for(&state.table, &animal),
    })
}

async fn get_call_for(
    State(state): State<AppState>,
    payload: Result<Json<CallForRequest>, JsonRejection>,
) -> Response {
    // An empty table answers before the body is looked at.
    let lookup = if state.table.is_empty() {
        query::CallLookup::NoData
    } else {
        let Json(request) = match payload {
            Ok(payload) => payload,
            Err(rejection) => {
                log::warn!("Rejected /get_call_for body: {rejection}");
                return rejection.into_response();
            }
        };
        match (request.animal, request.sound) {
            (Some(Value::String(animal)), Some(Value::String(sound))) => {
                query::call_for(&state.table, &animal, &sound)
            }
            _ => query::CallLookup::NoMatch,
        }
    };

    Json(CallForResponse {
        call_for: lookup.message().to_string(),
    })
    .into_response()
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(query::health(&state.table))
}

async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        page::MAIN_JS,
    )
}

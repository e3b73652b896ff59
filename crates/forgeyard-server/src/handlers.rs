//! REST request handlers.

use crate::response::ApiResponse;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use forgeyard_core::{
    ForgeyardError, InspectionPlan, MatchOutcome, MatchRequest, NewManufacturer, ProcessSheet,
    VariantSheet,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Manufacturers returned by `/manufacturers/featured` when no count is given.
const DEFAULT_FEATURED_COUNT: usize = 4;

type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

/// Map a core error onto the envelope and its HTTP status.
fn failure<T>(err: &ForgeyardError) -> Reply<T> {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::error(err.to_string())))
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// `POST /api/v1/manufacturers/match` - rank catalog manufacturers for a job.
pub async fn handle_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MatchRequest>,
) -> Reply<Value> {
    debug!("match request for operation '{}'", request.operation);

    match state.api.match_manufacturers(&request).await {
        Ok(MatchOutcome::Ranked {
            operation,
            manufacturers,
        }) => (
            StatusCode::OK,
            Json(ApiResponse::success(json!({
                "operation": operation,
                "manufacturers": manufacturers,
            }))),
        ),
        Ok(MatchOutcome::NoMatch { operation }) => {
            warn!("no manufacturers matched '{}'", operation);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(
                    "Sorry, do not have manufacturers relevant to it!",
                )),
            )
        }
        Err(e) => {
            error!("match failed: {}", e);
            failure(&e)
        }
    }
}

/// `POST /api/v1/manufacturers` - add a batch of manufacturers to the catalog.
pub async fn handle_add_manufacturers(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Reply<Value> {
    let batch: Vec<NewManufacturer> = match body.get("manufacturers") {
        Some(list) if list.is_array() => match serde_json::from_value(list.clone()) {
            Ok(batch) => batch,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(format!(
                        "invalid manufacturer payload: {e}"
                    ))),
                )
            }
        },
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Manufacturers data should be an array.")),
            )
        }
    };

    match state.api.add_manufacturers(batch).await {
        Ok(records) => {
            debug!("added {} manufacturers to the catalog", records.len());
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(json!({"manufacturers": records}))),
            )
        }
        Err(e) => {
            warn!("manufacturer batch rejected: {}", e);
            failure(&e)
        }
    }
}

/// `GET /api/v1/manufacturers` - list the full catalog.
pub async fn handle_list_manufacturers(State(state): State<Arc<AppState>>) -> Reply<Value> {
    match state.api.list_manufacturers().await {
        Ok(records) => (
            StatusCode::OK,
            Json(ApiResponse::success(json!({"manufacturers": records}))),
        ),
        Err(e) => {
            error!("catalog listing failed: {}", e);
            failure(&e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    count: Option<usize>,
}

/// `GET /api/v1/manufacturers/featured` - random sample for landing pages.
pub async fn handle_featured(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeaturedParams>,
) -> Reply<Value> {
    let count = params.count.unwrap_or(DEFAULT_FEATURED_COUNT);

    match state.api.featured_manufacturers(count).await {
        Ok(records) => (
            StatusCode::OK,
            Json(ApiResponse::success(json!({"manufacturers": records}))),
        ),
        Err(e) => {
            error!("featured sampling failed: {}", e);
            failure(&e)
        }
    }
}

/// `GET /api/v1/manufacturers/:id` - fetch a single manufacturer.
pub async fn handle_get_manufacturer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Reply<Value> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "'{id}' is not a valid manufacturer id"
            ))),
        );
    };

    match state.api.get_manufacturer(id).await {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(json!({"manufacturer": record}))),
        ),
        Err(e) => failure(&e),
    }
}

/// `GET /api/v1/planner/:product/operations` - generate a process sheet.
pub async fn handle_process_sheet(
    State(state): State<Arc<AppState>>,
    Path(product): Path<String>,
) -> Reply<ProcessSheet> {
    match state.api.process_sheet(&product).await {
        Ok(sheet) => (StatusCode::OK, Json(ApiResponse::success(sheet))),
        Err(e) => {
            error!("process sheet for '{}' failed: {}", product, e);
            failure(&e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VariantsBody {
    /// Free-form specification to steer variant generation.
    #[serde(default)]
    specs: Option<String>,
}

/// `POST /api/v1/planner/:product/variants` - propose product variants.
pub async fn handle_variants(
    State(state): State<Arc<AppState>>,
    Path(product): Path<String>,
    body: Option<Json<VariantsBody>>,
) -> Reply<VariantSheet> {
    let specs = body.and_then(|Json(b)| b.specs);

    match state.api.product_variants(&product, specs.as_deref()).await {
        Ok(sheet) => (StatusCode::OK, Json(ApiResponse::success(sheet))),
        Err(e) => {
            error!("variants for '{}' failed: {}", product, e);
            failure(&e)
        }
    }
}

/// `GET /api/v1/planner/:product/inspection` - generate an inspection plan.
pub async fn handle_inspection(
    State(state): State<Arc<AppState>>,
    Path(product): Path<String>,
) -> Reply<InspectionPlan> {
    match state.api.inspection_plan(&product).await {
        Ok(plan) => (StatusCode::OK, Json(ApiResponse::success(plan))),
        Err(e) => {
            error!("inspection plan for '{}' failed: {}", product, e);
            failure(&e)
        }
    }
}

//! # API REST
//!
//! REST API implementation for the flap selector.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and `flap-core` for the engine and the usage log.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    validate_admin_key, AuthError, ClassifyReq, ClassifyRes, FeedbackReq, FeedbackRes,
    HealthRes, HealthService, RecommendReq, RecommendRes, SubunitEntry, SubunitsRes,
    UsageCountRes, ADMIN_KEY_HEADER,
};
use flap_core::{recommend, CoreConfig, Feedback, FlapError, UsageLog, UsageRecord};

type ApiError = (StatusCode, String);

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    usage_log: UsageLog,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            usage_log: UsageLog::new(cfg.clone()),
            cfg,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_subunits,
        classify_defect,
        recommend_flap,
        submit_feedback,
        usage_count,
        export_usage,
    ),
    components(schemas(
        HealthRes,
        SubunitEntry,
        SubunitsRes,
        ClassifyReq,
        ClassifyRes,
        RecommendReq,
        RecommendRes,
        FeedbackReq,
        FeedbackRes,
        UsageCountRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/subunits", get(list_subunits))
        .route("/classify", post(classify_defect))
        .route("/recommend", post(recommend_flap))
        .route("/feedback", post(submit_feedback))
        .route("/usage/count", get(usage_count))
        .route("/usage/export", get(export_usage))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps core errors onto HTTP status codes.
///
/// Invalid input is the caller's fault; everything else is an internal fault and is logged.
fn flap_error(context: &str, e: FlapError) -> ApiError {
    match e {
        FlapError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        other => {
            tracing::error!("{context} error: {:?}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/subunits",
    responses(
        (status = 200, description = "Subunit catalog with size cutoffs", body = SubunitsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List the anatomical subunit catalog.
#[axum::debug_handler]
async fn list_subunits(State(_state): State<AppState>) -> Result<Json<SubunitsRes>, ApiError> {
    SubunitsRes::from_catalog()
        .map(Json)
        .map_err(|e| flap_error("List subunits", e))
}

#[utoipa::path(
    post,
    path = "/classify",
    request_body = ClassifyReq,
    responses(
        (status = 200, description = "Size category", body = ClassifyRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Classify a defect diameter for a subunit.
#[axum::debug_handler]
async fn classify_defect(
    State(_state): State<AppState>,
    Json(req): Json<ClassifyReq>,
) -> Result<Json<ClassifyRes>, ApiError> {
    let size = req.classify().map_err(|e| flap_error("Classify", e))?;
    Ok(Json(ClassifyRes {
        size: size.as_str().to_owned(),
    }))
}

#[utoipa::path(
    post,
    path = "/recommend",
    request_body = RecommendReq,
    responses(
        (status = 200, description = "Recommended flap", body = RecommendRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Recommend a reconstructive flap for a case.
///
/// # Errors
/// Returns `400 Bad Request` if any field is out of its domain, and
/// `500 Internal Server Error` if the subunit tables are out of sync.
#[axum::debug_handler]
async fn recommend_flap(
    State(_state): State<AppState>,
    Json(req): Json<RecommendReq>,
) -> Result<Json<RecommendRes>, ApiError> {
    let case = req.to_case().map_err(|e| flap_error("Recommend", e))?;
    let rec = recommend(&case).map_err(|e| flap_error("Recommend", e))?;
    Ok(Json(rec.into()))
}

#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackReq,
    responses(
        (status = 201, description = "Feedback logged", body = FeedbackRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Log a case together with the clinician's feedback.
///
/// The recommendation is recomputed from the submitted case, so the logged flap is always the
/// one the engine produces for that case.
#[axum::debug_handler]
async fn submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackReq>,
) -> Result<(StatusCode, Json<FeedbackRes>), ApiError> {
    let case = req.case.to_case().map_err(|e| flap_error("Feedback", e))?;
    let feedback = Feedback::new(req.used_recommended, req.alternative_flap.as_deref())
        .map_err(|e| flap_error("Feedback", e))?;
    let rec = recommend(&case).map_err(|e| flap_error("Feedback", e))?;

    let record = UsageRecord::new(&case, &rec, &feedback, chrono::Utc::now());
    state
        .usage_log
        .append(&record)
        .map_err(|e| flap_error("Feedback", e))?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackRes {
            logged: true,
            timestamp_utc: record.timestamp_utc,
            recommended_flap: record.recommended_flap,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/usage/count",
    responses(
        (status = 200, description = "Number of logged cases", body = UsageCountRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Count logged cases.
#[axum::debug_handler]
async fn usage_count(State(state): State<AppState>) -> Result<Json<UsageCountRes>, ApiError> {
    let count = state
        .usage_log
        .count()
        .map_err(|e| flap_error("Usage count", e))?;
    Ok(Json(UsageCountRes {
        logged_cases: count as u64,
    }))
}

#[utoipa::path(
    get,
    path = "/usage/export",
    params(
        ("x-admin-key" = String, Header, description = "Admin key configured at startup")
    ),
    responses(
        (status = 200, description = "Usage log as JSON Lines", body = String, content_type = "application/x-ndjson"),
        (status = 401, description = "Missing or invalid admin key"),
        (status = 403, description = "Export disabled"),
        (status = 500, description = "Internal server error")
    )
)]
/// Download the usage log. Requires the admin key.
#[axum::debug_handler]
async fn export_usage(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let provided = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = validate_admin_key(provided, state.cfg.admin_key()) {
        tracing::warn!("Usage export refused: {e}");
        let status = match e {
            AuthError::Disabled => StatusCode::FORBIDDEN,
            AuthError::Missing | AuthError::Invalid => StatusCode::UNAUTHORIZED,
        };
        return Err((status, e.to_string()));
    }

    let bytes = state
        .usage_log
        .export()
        .map_err(|e| flap_error("Usage export", e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/x-ndjson"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"usage_log.jsonl\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

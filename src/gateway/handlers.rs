use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::{ApplicationRepository, FeeForm, FeeSummary, PassportApplication};
use crate::db::Database;
use crate::receipt::Receipt;
use crate::words;

use super::state::AppState;
use super::types::{
    AmountQuery, AmountWordsData, ApiResponse, ApplicationData, CaseNoQuery, HealthResponse,
    error_codes,
};

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

fn api_error(status: StatusCode, code: i32, msg: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::<()>::error(code, msg)))
}

fn invalid_parameter(msg: impl Into<String>) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
}

fn database(state: &AppState) -> Result<&Arc<Database>, ApiError> {
    state.pg_db.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            "Database unavailable",
        )
    })
}

fn internal_error(e: sqlx::Error) -> ApiError {
    tracing::error!("Database error: {}", e);
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        "Internal error",
    )
}

/// GET /api/v1/health
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms}}
/// - Unhealthy: 503 Service Unavailable
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let healthy = match state.pg_db {
        Some(ref db) => match db.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
                false
            }
        },
        None => false,
    };

    if healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                timestamp_ms: now_ms,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                code: error_codes::SERVICE_UNAVAILABLE,
                msg: "unavailable".to_string(),
                data: None,
            }),
        )
    }
}

/// GET /api/v1/amount-in-words?amount=1025.50
pub async fn amount_in_words(
    Query(query): Query<AmountQuery>,
) -> Result<Json<ApiResponse<AmountWordsData>>, ApiError> {
    let amount = Decimal::from_str(query.amount.trim())
        .map_err(|_| invalid_parameter(format!("Invalid amount: '{}'", query.amount)))?;
    let words = words::amount_in_words(amount).map_err(|e| invalid_parameter(e.to_string()))?;
    Ok(Json(ApiResponse::success(AmountWordsData { amount, words })))
}

/// POST /api/v1/applications/preview
///
/// Totals and words for a partially filled form. Nothing is stored.
pub async fn preview_application(
    Json(form): Json<FeeForm>,
) -> Result<Json<ApiResponse<FeeSummary>>, ApiError> {
    let summary = form.summary().map_err(|e| invalid_parameter(e.to_string()))?;
    Ok(Json(ApiResponse::success(summary)))
}

/// POST /api/v1/applications
pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    Json(form): Json<FeeForm>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationData>>), ApiError> {
    let application = form.validate().map_err(|e| {
        tracing::warn!("Rejected application: {}", e);
        invalid_parameter(e.to_string())
    })?;

    let db = database(&state)?;
    let stored = ApplicationRepository::insert(db.pool(), &application)
        .await
        .map_err(internal_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(with_receipt(stored))),
    ))
}

fn with_receipt(stored: PassportApplication) -> ApplicationData {
    let receipt = Receipt::new(&stored.application)
        .with_reference(stored.id)
        .to_string();
    ApplicationData {
        application: stored,
        receipt,
    }
}

/// GET /api/v1/applications?case_no=LHR-2024-0012
///
/// Every application filed under a case number, newest first
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CaseNoQuery>,
) -> Result<Json<ApiResponse<Vec<ApplicationData>>>, ApiError> {
    let case_no = query.case_no.trim();
    if case_no.is_empty() {
        return Err(invalid_parameter("Missing required field: case_no"));
    }

    let db = database(&state)?;
    let stored = ApplicationRepository::list_by_case_no(db.pool(), case_no)
        .await
        .map_err(internal_error)?;

    Ok(Json(ApiResponse::success(
        stored.into_iter().map(with_receipt).collect(),
    )))
}

/// GET /api/v1/applications/{id}
pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ApplicationData>>, ApiError> {
    let db = database(&state)?;
    let stored = ApplicationRepository::get_by_id(db.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                error_codes::NOT_FOUND,
                format!("Application {} not found", id),
            )
        })?;

    Ok(Json(ApiResponse::success(with_receipt(stored))))
}

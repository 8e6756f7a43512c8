use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::trip::{
    ConvertCurrencyRequest, ConvertCurrencyResponse, PlanResult, TripRequest,
};
use crate::services::currency_service::CurrencyService;
use crate::services::planner_service::{PlannerError, PlannerService};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub planner_service: Arc<dyn PlannerService>,
    pub currency_service: Arc<dyn CurrencyService>,
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Convert PlannerError to HTTP response
impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            PlannerError::InvalidBudget => (
                StatusCode::BAD_REQUEST,
                "invalid_budget",
                "Budget must be positive",
            ),
            PlannerError::InvalidDays => (
                StatusCode::BAD_REQUEST,
                "invalid_days",
                "Trip must be at least 1 day",
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for generating a trip plan
///
/// Computes the budget allocation, day-by-day itinerary and summary for
/// the supplied trip parameters.
#[utoipa::path(
    post,
    path = "/api/generate_plan",
    request_body = TripRequest,
    responses(
        (status = 200, description = "Plan successfully generated", body = PlanResult),
        (status = 400, description = "Validation error (non-positive budget, zero days)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planner"
)]
pub async fn generate_plan_handler(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<PlanResult>, Response> {
    // Validate request body
    if let Err(validation_errors) = request.validate() {
        let error_message = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        let error_response = ErrorResponse::new("validation_error", &error_message);
        return Err((StatusCode::BAD_REQUEST, Json(error_response)).into_response());
    }

    // Call planner service to compute the plan
    match state.planner_service.compute_plan(request).await {
        Ok(plan) => Ok(Json(plan)),
        Err(e) => {
            tracing::error!("plan generation failed: {e}");
            Err(e.into_response())
        }
    }
}

/// Handler for converting an amount between the supported currency symbols
///
/// Uses a fixed rate table; unknown pairs return the amount unchanged.
#[utoipa::path(
    post,
    path = "/api/convert_currency",
    request_body = ConvertCurrencyRequest,
    responses(
        (status = 200, description = "Converted amount", body = ConvertCurrencyResponse)
    ),
    tag = "currency"
)]
pub async fn convert_currency_handler(
    State(state): State<AppState>,
    Json(request): Json<ConvertCurrencyRequest>,
) -> Json<ConvertCurrencyResponse> {
    let result = state
        .currency_service
        .convert(request.amount, &request.from, &request.to)
        .await;

    Json(ConvertCurrencyResponse {
        result,
        currency: request.to,
    })
}

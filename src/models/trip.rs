use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::category::CategoryAllocation;
use crate::models::itinerary::DayPlan;
use crate::validation::validate_positive_amount;

/// Request payload for generating a trip plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "user_name": "Hermione",
    "destination": "Visakhapatnam",
    "budget": 100000.0,
    "days": 5,
    "travel_style": "Relaxed",
    "age": 25,
    "currency": "₹",
    "start_date": "2025-11-01"
}))]
pub struct TripRequest {
    #[validate(length(min = 1, message = "Traveller name is required"))]
    pub user_name: String,

    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,

    /// Total trip budget in the traveller's own currency units
    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(minimum = 0.01, example = 100000.0, value_type = f64)]
    pub budget: Decimal,

    #[validate(range(min = 1, message = "Trip must be at least 1 day"))]
    #[schema(minimum = 1, example = 5)]
    #[serde(rename = "days")]
    pub num_days: u32,

    /// Open set of style labels; anything but "Fast-paced" uses the default pacing
    #[schema(example = "Relaxed")]
    pub travel_style: String,

    pub age: u32,

    /// Currency symbol used for display only; allocation stays in input units
    #[schema(example = "₹")]
    pub currency: String,

    /// Expected as YYYY-MM-DD; unparseable dates fall back to today
    #[schema(format = "date", example = "2025-11-01")]
    pub start_date: String,
}

/// Full plan returned to the caller, computed fresh per request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlanResult {
    pub trip_title: String,
    pub brief_idea: String,
    pub estimated_cost: Decimal,
    /// Display-label keyed mapping of the six category amounts
    #[schema(value_type = Object)]
    pub allocation: CategoryAllocation,
    pub itinerary: Vec<DayPlan>,
}

fn default_from_currency() -> String {
    "₹".to_string()
}

fn default_to_currency() -> String {
    "$".to_string()
}

/// Request payload for the static currency conversion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "amount": 100.0,
    "from": "₹",
    "to": "$"
}))]
pub struct ConvertCurrencyRequest {
    #[serde(default)]
    #[schema(example = 100.0)]
    pub amount: Decimal,

    #[serde(default = "default_from_currency")]
    #[schema(example = "₹")]
    pub from: String,

    #[serde(default = "default_to_currency")]
    #[schema(example = "$")]
    pub to: String,
}

/// Converted amount in the target currency
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "result": 1.2,
    "currency": "$"
}))]
pub struct ConvertCurrencyResponse {
    pub result: Decimal,
    pub currency: String,
}

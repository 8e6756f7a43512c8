use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Slot of the day an activity is scheduled in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Lunch,
    Afternoon,
    Evening,
}

/// A single scheduled activity with its cost estimate.
///
/// Costs may be fractional here; rounding happens at the day level.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    pub time: TimeOfDay,
    pub desc: String,
    pub cost: Decimal,
}

/// One day of the itinerary with its activities and rounded cost estimate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
    #[serde(rename = "estCost")]
    pub est_cost: Decimal,
}

/// Classification of a day index within the trip.
///
/// Arrival is checked before departure, so a one-day trip is arrival-only
/// and never gets departure activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPosition {
    Arrival,
    Exploration,
    Departure,
}

impl DayPosition {
    pub fn classify(day: u32, num_days: u32) -> Self {
        if day == 1 {
            DayPosition::Arrival
        } else if day == num_days {
            DayPosition::Departure
        } else {
            DayPosition::Exploration
        }
    }
}

/// The full itinerary paired with the start date the day sequence was built from
#[derive(Debug, Clone)]
pub struct ItineraryPlan {
    pub start_date: NaiveDate,
    pub days: Vec<DayPlan>,
}

pub mod category;
pub mod itinerary;
pub mod trip;

pub use category::{Category, CategoryAllocation};
pub use itinerary::{Activity, DayPlan, DayPosition, ItineraryPlan, TimeOfDay};
pub use trip::{ConvertCurrencyRequest, ConvertCurrencyResponse, PlanResult, TripRequest};

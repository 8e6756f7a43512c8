use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::trip::{PlanResult, TripRequest};
use crate::services::{allocator, itinerary_builder};

/// Planner service errors
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("Invalid budget: budget must be positive")]
    InvalidBudget,

    #[error("Invalid trip length: trip must be at least 1 day")]
    InvalidDays,
}

/// Trait defining plan computation
#[async_trait]
pub trait PlannerService: Send + Sync {
    /// Compute the allocation, itinerary and summary for a trip request
    async fn compute_plan(&self, request: TripRequest) -> Result<PlanResult, PlannerError>;
}

/// Implementation of PlannerService
pub struct PlannerServiceImpl;

#[async_trait]
impl PlannerService for PlannerServiceImpl {
    async fn compute_plan(&self, request: TripRequest) -> Result<PlanResult, PlannerError> {
        // The handler validates these too; reject here so the arithmetic
        // below never sees a non-positive budget or a zero day count.
        if request.budget <= Decimal::ZERO {
            return Err(PlannerError::InvalidBudget);
        }
        if request.num_days == 0 {
            return Err(PlannerError::InvalidDays);
        }

        let allocation = allocator::allocate(request.budget, request.age, &request.travel_style);
        let estimated_cost = allocation.total();

        let itinerary = itinerary_builder::build_itinerary(
            &request.destination,
            request.num_days,
            &request.travel_style,
            &allocation,
            &request.start_date,
        );

        let trip_title = format!(
            "⚡ {}-Day {} Adventure to {}",
            request.num_days, request.travel_style, request.destination
        );
        let brief_idea = format!(
            "Greetings, **{}**! The prophecy suggests a journey tailored to your {} years. \
             We have balanced your **{}{}** to ensure maximum magic.",
            request.user_name,
            request.age,
            request.currency,
            format_whole_amount(request.budget),
        );

        Ok(PlanResult {
            trip_title,
            brief_idea,
            estimated_cost,
            allocation,
            itinerary: itinerary.days,
        })
    }
}

/// Formats an amount as a whole number with comma separators (e.g. 100,000)
fn format_whole_amount(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn sample_request() -> TripRequest {
        TripRequest {
            user_name: "Hermione".to_string(),
            destination: "Visakhapatnam".to_string(),
            budget: Decimal::from(100_000),
            num_days: 5,
            travel_style: "Relaxed".to_string(),
            age: 25,
            currency: "₹".to_string(),
            start_date: "2025-11-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_compute_plan_produces_allocation_itinerary_and_summary() {
        let service = PlannerServiceImpl;

        let plan = service
            .compute_plan(sample_request())
            .await
            .expect("plan should be computed");

        assert_eq!(plan.trip_title, "⚡ 5-Day Relaxed Adventure to Visakhapatnam");
        assert!(plan.brief_idea.contains("Greetings, **Hermione**!"));
        assert!(plan.brief_idea.contains("your 25 years"));
        assert!(plan.brief_idea.contains("**₹100,000**"));

        assert_eq!(plan.estimated_cost, Decimal::from(100_000));
        assert_eq!(plan.estimated_cost, plan.allocation.total());
        assert_eq!(plan.allocation.amount(Category::Lodging), Decimal::from(30_000));
        assert_eq!(plan.itinerary.len(), 5);
    }

    #[tokio::test]
    async fn test_compute_plan_rejects_non_positive_budget() {
        let service = PlannerServiceImpl;
        let mut request = sample_request();
        request.budget = Decimal::ZERO;

        let result = service.compute_plan(request).await;
        assert!(matches!(result, Err(PlannerError::InvalidBudget)));
    }

    #[tokio::test]
    async fn test_compute_plan_rejects_zero_days() {
        let service = PlannerServiceImpl;
        let mut request = sample_request();
        request.num_days = 0;

        let result = service.compute_plan(request).await;
        assert!(matches!(result, Err(PlannerError::InvalidDays)));
    }

    #[test]
    fn test_format_whole_amount_groups_thousands() {
        assert_eq!(format_whole_amount(Decimal::from(0)), "0");
        assert_eq!(format_whole_amount(Decimal::from(999)), "999");
        assert_eq!(format_whole_amount(Decimal::from(1_000)), "1,000");
        assert_eq!(format_whole_amount(Decimal::from(100_000)), "100,000");
        assert_eq!(format_whole_amount(Decimal::from(1_234_567)), "1,234,567");
        assert_eq!(format_whole_amount(Decimal::new(49_999_5, 1)), "50,000");
    }
}

use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::category::{Category, CategoryAllocation};
use crate::models::itinerary::{Activity, DayPlan, DayPosition, ItineraryPlan, TimeOfDay};

/// Calendar format accepted for trip start dates
const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the day-by-day itinerary from the category allocation.
///
/// Each day is classified as arrival, exploration or departure and gets a
/// fixed activity template with costs distributed proportionally from the
/// allocation. A one-day trip matches both the arrival and departure rules;
/// arrival wins, so the single day carries the full lodging amount and no
/// departure activities.
pub fn build_itinerary(
    destination: &str,
    num_days: u32,
    style: &str,
    allocation: &CategoryAllocation,
    start_date: &str,
) -> ItineraryPlan {
    let start = resolve_start_date(start_date);

    let food_and_misc =
        allocation.amount(Category::Feasts) + allocation.amount(Category::Miscellaneous);
    let daily_food_misc = food_and_misc / Decimal::from(num_days);

    // Lodging covers num_days - 1 nights; a one-day trip still books the
    // full lodging amount as its one night.
    let lodging = allocation.amount(Category::Lodging);
    let daily_accommodation = if num_days > 1 {
        lodging / Decimal::from(num_days - 1)
    } else {
        lodging
    };

    let mut days = Vec::with_capacity(num_days as usize);
    for (day, date) in (1..=num_days).zip(start.iter_days()) {
        let position = DayPosition::classify(day, num_days);

        let phase = match position {
            DayPosition::Arrival => "Arrival via Portkey".to_string(),
            DayPosition::Departure => "Departure (Mischief Managed)".to_string(),
            DayPosition::Exploration => format!("{style} Exploration"),
        };
        let title = format!("Day {} ({}): {}", day, date.format("%b %d"), phase);

        let (activities, accommodation) = match position {
            DayPosition::Arrival => (
                vec![
                    Activity {
                        time: TimeOfDay::Morning,
                        desc: format!("Apparate at {destination}. Check into lodgings."),
                        cost: Decimal::ZERO,
                    },
                    Activity {
                        time: TimeOfDay::Evening,
                        desc: "Visit the shoreline (Beach) for sunset.".to_string(),
                        cost: daily_food_misc * Decimal::new(5, 1),
                    },
                ],
                daily_accommodation,
            ),
            DayPosition::Departure => (
                vec![
                    Activity {
                        time: TimeOfDay::Morning,
                        desc: "Final visit to shops.".to_string(),
                        cost: Decimal::from(500),
                    },
                    Activity {
                        time: TimeOfDay::Lunch,
                        desc: "The Leaving Feast.".to_string(),
                        cost: daily_food_misc * Decimal::new(6, 1),
                    },
                ],
                Decimal::ZERO,
            ),
            DayPosition::Exploration => {
                let activities_total = allocation.amount(Category::Activities);
                let per_day = if num_days > 2 {
                    activities_total / Decimal::from(num_days - 2)
                } else {
                    activities_total
                };
                let activity_budget =
                    per_day.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

                (
                    vec![
                        Activity {
                            time: TimeOfDay::Morning,
                            desc: "Major Quest (e.g., Kailasagiri or Temple).".to_string(),
                            cost: activity_budget * Decimal::new(5, 1),
                        },
                        Activity {
                            time: TimeOfDay::Afternoon,
                            desc: "Leisure or Museum visit.".to_string(),
                            cost: Decimal::from(300),
                        },
                        Activity {
                            time: TimeOfDay::Evening,
                            desc: "Dinner and Night Life.".to_string(),
                            cost: daily_food_misc * Decimal::new(7, 1),
                        },
                    ],
                    daily_accommodation,
                )
            }
        };

        let activity_total: Decimal = activities.iter().map(|a| a.cost).sum();
        let est_cost = (activity_total + accommodation)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

        days.push(DayPlan {
            day,
            title,
            activities,
            est_cost,
        });
    }

    ItineraryPlan {
        start_date: start,
        days,
    }
}

/// Parses the requested start date, falling back to today when unparseable.
///
/// The fallback is recoverable and must never abort itinerary generation.
fn resolve_start_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, START_DATE_FORMAT).unwrap_or_else(|_| {
        warn!("unparseable start date '{raw}', falling back to today");
        Local::now().date_naive()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::allocator::allocate;

    fn relaxed_allocation() -> CategoryAllocation {
        // 30000 / 20000 / 17000 / 22000 / 6000 / 5000
        allocate(Decimal::from(100_000), 25, "Relaxed")
    }

    #[test]
    fn test_five_day_trip_day_structure() {
        let allocation = relaxed_allocation();
        let plan = build_itinerary("Visakhapatnam", 5, "Relaxed", &allocation, "2025-11-01");

        assert_eq!(plan.days.len(), 5);
        assert_eq!(plan.days[0].title, "Day 1 (Nov 01): Arrival via Portkey");
        assert_eq!(
            plan.days[4].title,
            "Day 5 (Nov 05): Departure (Mischief Managed)"
        );
        for day in &plan.days[1..4] {
            assert!(day.title.contains("Relaxed Exploration"));
        }
    }

    #[test]
    fn test_five_day_trip_day_costs() {
        let allocation = relaxed_allocation();
        let plan = build_itinerary("Visakhapatnam", 5, "Relaxed", &allocation, "2025-11-01");

        // daily_food_misc = 23000 / 5 = 4600, daily_accommodation = 30000 / 4 = 7500
        // Arrival: 7500 + 0 + 2300
        assert_eq!(plan.days[0].est_cost, Decimal::from(9_800));
        // Exploration: activity budget = round(22000 / 3) = 7333
        // 7500 + 3666.5 + 300 + 3220 = 14686.5 rounds to the even 14686
        for day in &plan.days[1..4] {
            assert_eq!(day.est_cost, Decimal::from(14_686));
        }
        // Departure: 500 + 2760, no accommodation
        assert_eq!(plan.days[4].est_cost, Decimal::from(3_260));
    }

    #[test]
    fn test_single_day_trip_is_arrival_only_with_full_lodging() {
        let allocation = allocate(Decimal::from(50_000), 40, "Fast-paced");
        let plan = build_itinerary("Hogsmeade", 1, "Fast-paced", &allocation, "2025-11-01");

        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].title.contains("Arrival via Portkey"));
        assert_eq!(plan.days[0].activities.len(), 2);
        assert_eq!(plan.days[0].activities[0].time, TimeOfDay::Morning);
        assert_eq!(plan.days[0].activities[1].time, TimeOfDay::Evening);

        // daily_food_misc = 11500, evening costs 5750, full lodging 17500 applies
        assert_eq!(plan.days[0].est_cost, Decimal::from(23_250));
    }

    #[test]
    fn test_two_day_trip_has_arrival_then_departure() {
        let allocation = allocate(Decimal::from(20_000), 25, "Relaxed");
        let plan = build_itinerary("Diagon Alley", 2, "Relaxed", &allocation, "2025-11-01");

        assert_eq!(plan.days.len(), 2);
        assert!(plan.days[0].title.contains("Arrival via Portkey"));
        assert!(plan.days[1].title.contains("Departure (Mischief Managed)"));
        for day in &plan.days {
            assert!(!day.title.contains("Exploration"));
        }

        // daily_food_misc = (3400 + 1200) / 2 = 2300, one night at 6000
        assert_eq!(plan.days[0].est_cost, Decimal::from(7_150));
        assert_eq!(plan.days[1].est_cost, Decimal::from(1_880));
    }

    #[test]
    fn test_dates_advance_one_day_at_a_time_across_year_end() {
        let allocation = relaxed_allocation();
        let plan = build_itinerary("Visakhapatnam", 3, "Relaxed", &allocation, "2025-12-30");

        assert_eq!(
            plan.start_date,
            NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
        );
        assert!(plan.days[0].title.starts_with("Day 1 (Dec 30)"));
        assert!(plan.days[1].title.starts_with("Day 2 (Dec 31)"));
        assert!(plan.days[2].title.starts_with("Day 3 (Jan 01)"));
    }

    #[test]
    fn test_unparseable_start_date_falls_back_to_today() {
        let allocation = relaxed_allocation();
        let plan = build_itinerary("Visakhapatnam", 2, "Relaxed", &allocation, "next tuesday");

        assert_eq!(plan.start_date, Local::now().date_naive());
        assert_eq!(plan.days.len(), 2);
    }

    #[test]
    fn test_departure_shopping_cost_is_flat() {
        let allocation = relaxed_allocation();
        let plan = build_itinerary("Visakhapatnam", 5, "Relaxed", &allocation, "2025-11-01");

        let departure = &plan.days[4];
        assert_eq!(departure.activities[0].cost, Decimal::from(500));
        assert_eq!(departure.activities[0].time, TimeOfDay::Morning);
        assert_eq!(departure.activities[1].time, TimeOfDay::Lunch);
    }
}

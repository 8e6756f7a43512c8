use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::category::{Category, CategoryAllocation};

/// Splits the total budget across the six spending categories.
///
/// Amounts are rounded to whole currency units with banker's rounding
/// (round half to even), so the rounded total may drift from the input
/// budget by a unit or two.
pub fn allocate(budget: Decimal, age: u32, travel_style: &str) -> CategoryAllocation {
    let accommodation = accommodation_ratio(age, travel_style);
    let amounts = Category::ALL.map(|category| {
        (budget * ratio_for(category, accommodation))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    });
    CategoryAllocation::new(amounts)
}

/// Accommodation share of the budget.
///
/// Overrides apply in order and later rules win: the style rule replaces
/// whatever the age rule set, so "Fast-paced" forces 0.35 even for
/// travellers under 30.
fn accommodation_ratio(age: u32, travel_style: &str) -> Decimal {
    let mut ratio = Decimal::new(40, 2);
    if age < 30 {
        ratio = Decimal::new(30, 2);
    }
    if travel_style == "Fast-paced" {
        ratio = Decimal::new(35, 2);
    }
    ratio
}

/// Ratio for a category given the resolved accommodation share.
///
/// Activities absorbs whatever the accommodation override freed or
/// consumed, keeping the six ratios summing to exactly 1.0.
fn ratio_for(category: Category, accommodation: Decimal) -> Decimal {
    match category {
        Category::Lodging => accommodation,
        Category::Transport => Decimal::new(20, 2),
        Category::Feasts => Decimal::new(17, 2),
        Category::Activities => Decimal::new(12, 2) + (Decimal::new(40, 2) - accommodation),
        Category::Miscellaneous => Decimal::new(6, 2),
        Category::Savings => Decimal::new(5, 2),
    }
}

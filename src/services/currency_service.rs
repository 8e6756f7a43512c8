use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};

/// Trait defining currency conversion
#[async_trait]
pub trait CurrencyService: Send + Sync {
    /// Convert an amount between currency symbols, rounded to 2 decimals
    async fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal;
}

/// Conversion backed by a fixed rate table for the three supported symbols
/// (rupees, dollars and galleons).
///
/// Unknown pairs and same-currency conversions return the amount unchanged,
/// still rounded to 2 decimals.
pub struct StaticCurrencyService;

impl StaticCurrencyService {
    fn rate(from: &str, to: &str) -> Option<Decimal> {
        let rate = match (from, to) {
            ("₹", "$") => Decimal::new(12, 3),
            ("₹", "G") => Decimal::new(2, 3),
            ("$", "₹") => Decimal::new(83, 0),
            ("$", "G") => Decimal::new(16, 2),
            ("G", "₹") => Decimal::new(500, 0),
            ("G", "$") => Decimal::new(6, 0),
            _ => return None,
        };
        Some(rate)
    }
}

#[async_trait]
impl CurrencyService for StaticCurrencyService {
    async fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        let result = if from == to {
            amount
        } else {
            match Self::rate(from, to) {
                Some(rate) => amount * rate,
                None => amount,
            }
        };
        result.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }
}

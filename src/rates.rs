//! Rate records quoted against the EUR base currency

use serde::Serialize;
use std::fmt;

/// Base currency of the ECB reference-rate feed. All rates are units of the
/// quote currency per one EUR.
pub const BASE_CURRENCY: &str = "EUR";

/// One exported exchange rate: a `BASE/QUOTE` pair, its value, and the
/// as-of date shared by the whole batch.
///
/// The field names double as the CSV header (`forex,value,date`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRecord {
    pub forex: String,
    pub value: f64,
    pub date: String,
}

impl RateRecord {
    /// Create a record for one quote currency
    pub fn new(quote: &str, value: f64, date: &str) -> Self {
        Self {
            forex: format!("{}/{}", BASE_CURRENCY, quote),
            value,
            date: date.to_string(),
        }
    }

    /// The synthetic EUR/EUR record pinned to rate 1.0, always emitted first
    pub fn identity(date: &str) -> Self {
        Self::new(BASE_CURRENCY, 1.0, date)
    }
}

impl fmt::Display for RateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({})", self.forex, self.value, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_format() {
        let record = RateRecord::new("USD", 1.095, "2024-01-15");
        assert_eq!(record.forex, "EUR/USD");
        assert_eq!(record.value, 1.095);
        assert_eq!(record.date, "2024-01-15");
    }

    #[test]
    fn test_identity_record() {
        let record = RateRecord::identity("2024-01-15");
        assert_eq!(record.forex, "EUR/EUR");
        assert_eq!(record.value, 1.0);
        assert_eq!(record.date, "2024-01-15");
    }

    #[test]
    fn test_display() {
        let record = RateRecord::new("JPY", 161.2, "2024-01-15");
        assert_eq!(record.to_string(), "EUR/JPY = 161.2 (2024-01-15)");
    }
}

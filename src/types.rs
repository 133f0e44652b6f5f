//! Core types and aliases

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monetary amount (revenue, profit, prices)
pub type Money = f64;

/// Percentage value (0.0 to 100.0)
pub type Percent = f64;

/// Calendar year of an order
pub type Year = i32;

/// Calendar month number (1 = January)
pub type MonthNum = u32;

/// English month names indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Get the English name for a month number (1-12)
pub fn month_name(num: MonthNum) -> Option<&'static str> {
    if (1..=12).contains(&num) {
        Some(MONTH_NAMES[(num - 1) as usize])
    } else {
        None
    }
}

/// One sales transaction line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Order identifier; an order may span several line items
    pub order_number: String,
    pub order_date: NaiveDate,
    /// Derived from `order_date` at load time
    pub order_month_name: String,
    /// Derived from `order_date` at load time (1-12)
    pub order_month_num: MonthNum,
    pub us_region: String,
    /// Two-letter state code
    pub state: String,
    pub state_name: String,
    pub channel: String,
    pub customer_name: String,
    pub product_name: String,
    pub unit_price: Money,
    pub revenue: Money,
    pub profit: Money,
    /// Taken as provided by the source; never re-derived from profit/revenue
    pub profit_margin_pct: Percent,
}

impl Transaction {
    /// Year component of the order date
    pub fn order_year(&self) -> Year {
        self.order_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_lookup() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_order_year() {
        let tx = Transaction {
            order_number: "SO-1".to_string(),
            order_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            order_month_name: "June".to_string(),
            order_month_num: 6,
            us_region: "East".to_string(),
            state: "NY".to_string(),
            state_name: "New York".to_string(),
            channel: "Online".to_string(),
            customer_name: "Acme".to_string(),
            product_name: "Widget".to_string(),
            unit_price: 10.0,
            revenue: 100.0,
            profit: 10.0,
            profit_margin_pct: 10.0,
        };
        assert_eq!(tx.order_year(), 2023);
    }
}

//! Distinct-value discovery for the filter selectors
//!
//! The presentation layer populates its four dropdowns from the unfiltered
//! table: years, month names, regions, and channels, each prefixed with an
//! "All" sentinel meaning no constraint. The same lists back the validation
//! of programmatically supplied filter values.

use crate::error::{Result, SalesError};
use crate::filter::FilterSpec;
use crate::table::Table;
use crate::types::Year;
use hashbrown::HashSet;
use serde::Serialize;

/// Display label for the "no constraint" choice
pub const ALL_SENTINEL: &str = "All";

/// Distinct filterable values present in the unfiltered table
///
/// Ordering is stable and reproducible: years ascending, months in calendar
/// order, regions and channels in order of first appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selectors {
    pub years: Vec<Year>,
    pub months: Vec<String>,
    pub regions: Vec<String>,
    pub channels: Vec<String>,
}

impl Selectors {
    /// Scan a table once and collect the distinct values per dimension
    pub fn from_table(table: &Table) -> Self {
        let mut years: Vec<Year> = Vec::new();
        let mut months: Vec<(u32, String)> = Vec::new();
        let mut regions: Vec<String> = Vec::new();
        let mut channels: Vec<String> = Vec::new();

        let mut seen_years: HashSet<Year> = HashSet::new();
        let mut seen_months: HashSet<u32> = HashSet::new();
        let mut seen_regions: HashSet<&str> = HashSet::new();
        let mut seen_channels: HashSet<&str> = HashSet::new();

        for tx in table.rows() {
            if seen_years.insert(tx.order_year()) {
                years.push(tx.order_year());
            }
            if seen_months.insert(tx.order_month_num) {
                months.push((tx.order_month_num, tx.order_month_name.clone()));
            }
            if seen_regions.insert(&tx.us_region) {
                regions.push(tx.us_region.clone());
            }
            if seen_channels.insert(&tx.channel) {
                channels.push(tx.channel.clone());
            }
        }

        years.sort_unstable();
        months.sort_unstable_by_key(|(num, _)| *num);

        Self {
            years,
            months: months.into_iter().map(|(_, name)| name).collect(),
            regions,
            channels,
        }
    }

    /// Year choices for a selector widget, sentinel first
    pub fn year_options(&self) -> Vec<String> {
        Self::with_sentinel(self.years.iter().map(Year::to_string))
    }

    /// Month choices for a selector widget, sentinel first
    pub fn month_options(&self) -> Vec<String> {
        Self::with_sentinel(self.months.iter().cloned())
    }

    /// Region choices for a selector widget, sentinel first
    pub fn region_options(&self) -> Vec<String> {
        Self::with_sentinel(self.regions.iter().cloned())
    }

    /// Channel choices for a selector widget, sentinel first
    pub fn channel_options(&self) -> Vec<String> {
        Self::with_sentinel(self.channels.iter().cloned())
    }

    fn with_sentinel(values: impl Iterator<Item = String>) -> Vec<String> {
        std::iter::once(ALL_SENTINEL.to_string()).chain(values).collect()
    }

    /// Reject filter values that do not exist in the table
    ///
    /// Guards the programmatic path before the spec reaches the filter
    /// engine. Values absent from an already-filtered subset are not an
    /// error; they simply produce empty views downstream.
    pub fn validate(&self, spec: &FilterSpec) -> Result<()> {
        if let Some(year) = spec.year {
            if !self.years.contains(&year) {
                return Err(SalesError::Validation(format!("unknown year: {year}")));
            }
        }
        if let Some(month) = &spec.month {
            if !self.months.contains(month) {
                return Err(SalesError::Validation(format!("unknown month: {month:?}")));
            }
        }
        if let Some(region) = &spec.region {
            if !self.regions.contains(region) {
                return Err(SalesError::Validation(format!("unknown region: {region:?}")));
            }
        }
        if let Some(channel) = &spec.channel {
            if !self.channels.contains(channel) {
                return Err(SalesError::Validation(format!(
                    "unknown channel: {channel:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transaction;
    use chrono::{Datelike, NaiveDate};

    fn tx(date: (i32, u32, u32), region: &str, channel: &str) -> Transaction {
        let order_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Transaction {
            order_number: "SO-1".to_string(),
            order_month_name: crate::types::month_name(order_date.month())
                .unwrap()
                .to_string(),
            order_month_num: order_date.month(),
            order_date,
            us_region: region.to_string(),
            state: "NY".to_string(),
            state_name: "New York".to_string(),
            channel: channel.to_string(),
            customer_name: "Acme".to_string(),
            product_name: "Widget".to_string(),
            unit_price: 10.0,
            revenue: 100.0,
            profit: 10.0,
            profit_margin_pct: 10.0,
        }
    }

    fn sample_table() -> Table {
        Table::from_rows(vec![
            tx((2023, 11, 5), "West", "Online"),
            tx((2022, 2, 1), "East", "Retail"),
            tx((2023, 2, 9), "West", "Distributor"),
            tx((2022, 7, 20), "Central", "Online"),
        ])
    }

    #[test]
    fn test_years_ascending_months_calendar_order() {
        let selectors = Selectors::from_table(&sample_table());

        assert_eq!(selectors.years, vec![2022, 2023]);
        assert_eq!(selectors.months, vec!["February", "July", "November"]);
    }

    #[test]
    fn test_regions_and_channels_first_appearance() {
        let selectors = Selectors::from_table(&sample_table());

        assert_eq!(selectors.regions, vec!["West", "East", "Central"]);
        assert_eq!(selectors.channels, vec!["Online", "Retail", "Distributor"]);
    }

    #[test]
    fn test_options_are_sentinel_prefixed() {
        let selectors = Selectors::from_table(&sample_table());

        assert_eq!(selectors.year_options()[0], ALL_SENTINEL);
        assert_eq!(selectors.year_options()[1..], ["2022", "2023"]);
        assert_eq!(selectors.month_options()[0], ALL_SENTINEL);
        assert_eq!(selectors.region_options().len(), 4);
        assert_eq!(selectors.channel_options().len(), 4);
    }

    #[test]
    fn test_validate_accepts_known_values() {
        let selectors = Selectors::from_table(&sample_table());
        let spec = FilterSpec::new()
            .year(2022)
            .month("July")
            .region("Central")
            .channel("Online");

        assert!(selectors.validate(&spec).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let selectors = Selectors::from_table(&sample_table());

        assert!(selectors.validate(&FilterSpec::new().year(1999)).is_err());
        assert!(selectors
            .validate(&FilterSpec::new().month("Janvier"))
            .is_err());
        assert!(selectors
            .validate(&FilterSpec::new().region("North"))
            .is_err());
        assert!(selectors
            .validate(&FilterSpec::new().channel("Catalog"))
            .is_err());
    }

    #[test]
    fn test_stable_across_calls() {
        let table = sample_table();
        assert_eq!(Selectors::from_table(&table), Selectors::from_table(&table));
    }
}

//! Dataset loading
//!
//! Reads the whole transaction CSV into memory in one pass. Loading is
//! all-or-nothing: a missing file, an empty file, or a single unparsable
//! row aborts the load with [`SalesError::Load`].

use crate::error::{Result, SalesError};
use crate::table::Table;
use crate::types::{Money, Percent, Transaction, MONTH_NAMES};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::Path;

/// Date formats accepted for the `order_date` column
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Row shape as it appears in the source file; extra columns are ignored
#[derive(Debug, Deserialize)]
struct RawRecord {
    order_number: String,
    order_date: String,
    us_region: String,
    state: String,
    state_name: String,
    channel: String,
    customer_name: String,
    product_name: String,
    unit_price: Money,
    revenue: Money,
    profit: Money,
    profit_margin_pct: Percent,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}

/// Load a transaction table from a delimited file with one header row
///
/// The month name and number columns are derived from the parsed
/// `order_date`, so they are consistent with it by construction.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| SalesError::Load(format!("cannot open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawRecord>().enumerate() {
        let line = idx + 2; // header occupies line 1
        let raw = record.map_err(|e| SalesError::Load(format!("line {line}: {e}")))?;
        let order_date = parse_date(&raw.order_date).ok_or_else(|| {
            SalesError::Load(format!(
                "line {line}: unparsable order_date {:?}",
                raw.order_date
            ))
        })?;

        rows.push(Transaction {
            order_number: raw.order_number,
            order_month_name: MONTH_NAMES[order_date.month0() as usize].to_string(),
            order_month_num: order_date.month(),
            order_date,
            us_region: raw.us_region,
            state: raw.state,
            state_name: raw.state_name,
            channel: raw.channel,
            customer_name: raw.customer_name,
            product_name: raw.product_name,
            unit_price: raw.unit_price,
            revenue: raw.revenue,
            profit: raw.profit,
            profit_margin_pct: raw.profit_margin_pct,
        });
    }

    if rows.is_empty() {
        return Err(SalesError::Load(format!(
            "{}: no data rows",
            path.display()
        )));
    }

    log::info!("Loaded {} transactions from {}", rows.len(), path.display());
    Ok(Table::from_rows(rows))
}

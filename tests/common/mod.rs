//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use salescope::prelude::*;
use salescope::types::month_name;
use std::io::Write;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "order_number,order_date,us_region,state,state_name,channel,customer_name,product_name,unit_price,revenue,profit,profit_margin_pct";

/// Build a transaction with derived month columns consistent with the date
#[allow(clippy::too_many_arguments)]
pub fn tx(
    order: &str,
    date: (i32, u32, u32),
    region: &str,
    state: &str,
    state_name: &str,
    channel: &str,
    customer: &str,
    product: &str,
    revenue: f64,
    profit: f64,
    margin: f64,
) -> Transaction {
    let order_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    Transaction {
        order_number: order.to_string(),
        order_month_name: month_name(date.1).unwrap().to_string(),
        order_month_num: date.1,
        order_date,
        us_region: region.to_string(),
        state: state.to_string(),
        state_name: state_name.to_string(),
        channel: channel.to_string(),
        customer_name: customer.to_string(),
        product_name: product.to_string(),
        unit_price: 10.0,
        revenue,
        profit,
        profit_margin_pct: margin,
    }
}

/// Five-row dataset spanning two years, three regions, three channels
pub fn sample_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{CSV_HEADER}").unwrap();
    for line in [
        "SO-1001,2022-01-10,East,NY,New York,Online,Acme,Widget,10,100,10,10",
        "SO-1002,2022-03-14,West,CA,California,Retail,Globex,Gadget,20,200,20,10",
        "SO-1003,2023-01-20,East,NY,New York,Online,Acme,Widget,10,300,15,5",
        "SO-1004,2023-07-04,Central,TX,Texas,Distributor,Initech,Widget,10,400,40,10",
        "SO-1005,2023-07-09,West,CA,California,Online,Hooli,Doohickey,30,150,30,20",
    ] {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

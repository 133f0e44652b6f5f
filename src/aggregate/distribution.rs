//! Row-level and per-order distributions
//!
//! Feeds the order-value histogram and the price-vs-margin scatter. Binning
//! and marker styling stay in the presentation layer; this module only
//! produces the underlying values.

use super::group_rows;
use crate::table::View;
use crate::types::{Money, Percent};
use serde::Serialize;

/// Total revenue of one order (line items summed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderValue {
    pub order_number: String,
    pub revenue: Money,
}

/// Revenue summed per order number, orders in first-appearance order
pub fn order_value_distribution(view: &View<'_>) -> Vec<OrderValue> {
    group_rows(view, |tx| tx.order_number.as_str())
        .into_iter()
        .map(|(order_number, rows)| OrderValue {
            order_number,
            revenue: rows.iter().map(|tx| tx.revenue).sum(),
        })
        .collect()
}

/// One scatter point: a line item's price against its margin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub product_name: String,
    pub unit_price: Money,
    pub profit_margin_pct: Percent,
}

/// Row-level price/margin pairs labelled by product, in view order
pub fn price_margin_scatter(view: &View<'_>) -> Vec<PricePoint> {
    view.iter()
        .map(|tx| PricePoint {
            product_name: tx.product_name.clone(),
            unit_price: tx.unit_price,
            profit_margin_pct: tx.profit_margin_pct,
        })
        .collect()
}

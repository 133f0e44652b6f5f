//! # Salescope
//!
//! The filtering and aggregation engine behind a sales-analytics dashboard.
//!
//! A transaction table is loaded once per session; the presentation layer
//! collects filter selections (year, month, region, channel), and every
//! chart's data comes from a pure aggregation over the filtered view.
//!
//! ## Example
//!
//! ```rust,no_run
//! use salescope::prelude::*;
//!
//! fn main() -> salescope::error::Result<()> {
//!     let engine = AnalyticsEngine::from_csv("data/sales_data.csv")?;
//!
//!     let spec = FilterSpec::new().year(2023).region("East");
//!     let kpis = engine.kpi_summary(&spec)?;
//!     println!("revenue: {}", kpis.total_revenue);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod filter;
pub mod loader;
pub mod selectors;
pub mod table;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::aggregate::{KpiSummary, RankOrder};
    pub use crate::engine::AnalyticsEngine;
    pub use crate::error::{Result, SalesError};
    pub use crate::filter::FilterSpec;
    pub use crate::loader::load_csv;
    pub use crate::selectors::{Selectors, ALL_SENTINEL};
    pub use crate::table::{Table, View};
    pub use crate::types::Transaction;
}

//! salescope CLI - print dashboard views for a sales CSV
//!
//! A thin stand-in for the presentation layer: loads the dataset, applies
//! the requested filters, and prints the aggregate views as text or JSON.
//!
//! ## Example Usage
//!
//! ```bash
//! # Headline KPIs and breakdowns for the whole dataset
//! salescope --data data/sales_data.csv
//!
//! # Filtered to one slice
//! salescope --data data/sales_data.csv --year 2023 --region East
//!
//! # Everything as JSON for another consumer
//! salescope --data data/sales_data.csv --json
//! ```

use clap::Parser;
use colored::Colorize;
use salescope::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use std::process;

/// salescope: sales-analytics filtering and aggregation engine
#[derive(Parser)]
#[command(name = "salescope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aggregate a sales transaction CSV into dashboard views", long_about = None)]
struct Cli {
    /// Path to the transaction CSV
    #[arg(short, long, value_name = "CSV")]
    data: PathBuf,

    /// Keep only orders from this year
    #[arg(long)]
    year: Option<i32>,

    /// Keep only orders from this month (e.g. "March")
    #[arg(long)]
    month: Option<String>,

    /// Keep only orders from this US region
    #[arg(long)]
    region: Option<String>,

    /// Keep only orders from this sales channel
    #[arg(long)]
    channel: Option<String>,

    /// Emit every view as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let engine = AnalyticsEngine::from_csv(&cli.data)?;

    let mut spec = FilterSpec::new();
    if let Some(year) = cli.year {
        spec = spec.year(year);
    }
    if let Some(month) = &cli.month {
        spec = spec.month(month.clone());
    }
    if let Some(region) = &cli.region {
        spec = spec.region(region.clone());
    }
    if let Some(channel) = &cli.channel {
        spec = spec.channel(channel.clone());
    }

    if cli.json {
        print_json(&engine, &spec)
    } else {
        print_report(&engine, &spec)
    }
}

fn print_json(engine: &AnalyticsEngine, spec: &FilterSpec) -> anyhow::Result<()> {
    let views = json!({
        "selectors": engine.selectors(),
        "kpis": engine.kpi_summary(spec)?,
        "monthly_revenue": engine.monthly_revenue(spec)?,
        "monthly_profit": engine.monthly_profit(spec)?,
        "order_values": engine.order_value_distribution(spec)?,
        "price_margin_scatter": engine.price_margin_scatter(spec)?,
        "top_products_by_revenue": engine.products_by_revenue(spec, RankOrder::Top)?,
        "top_products_by_margin": engine.products_by_margin(spec, RankOrder::Top)?,
        "top_customers_by_revenue": engine.customers_by_revenue(spec, RankOrder::Top)?,
        "bottom_customers_by_revenue": engine.customers_by_revenue(spec, RankOrder::Bottom)?,
        "top_customers_by_margin": engine.customers_by_margin(spec, RankOrder::Top)?,
        "bottom_customers_by_margin": engine.customers_by_margin(spec, RankOrder::Bottom)?,
        "top_states_by_revenue": engine.states_by_revenue(spec, RankOrder::Top)?,
        "bottom_states_by_revenue": engine.states_by_revenue(spec, RankOrder::Bottom)?,
        "customer_profiles": engine.customer_profiles(spec)?,
        "channel_breakdown": engine.channel_breakdown(spec)?,
        "region_revenue": engine.region_revenue(spec)?,
        "region_margin": engine.region_margin(spec)?,
        "state_revenue": engine.state_revenue(spec)?,
    });
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

fn print_report(engine: &AnalyticsEngine, spec: &FilterSpec) -> anyhow::Result<()> {
    let kpis = engine.kpi_summary(spec)?;

    println!("{}", "Sales Analysis".bold());
    println!(
        "  {} ${:.0}",
        "Total Revenue:".cyan(),
        kpis.total_revenue
    );
    println!("  {} ${:.0}", "Total Profit: ".cyan(), kpis.total_profit);
    match kpis.profit_margin {
        Some(margin) => println!("  {} {:.1}%", "Profit Margin:".cyan(), margin),
        None => println!("  {} {}", "Profit Margin:".cyan(), "no data".dimmed()),
    }
    println!("  {} {}", "Total Orders: ".cyan(), kpis.total_orders);
    match kpis.revenue_per_order {
        Some(rpo) => println!("  {} ${:.0}", "Rev / Order:  ".cyan(), rpo),
        None => println!("  {} {}", "Rev / Order:  ".cyan(), "no data".dimmed()),
    }

    println!("\n{}", "By Channel".bold());
    for row in engine.channel_breakdown(spec)? {
        println!(
            "  {:<14} revenue ${:>12.2}  profit ${:>11.2}  margin/sale {:>6.2}%",
            row.channel, row.total_revenue, row.total_profit, row.margin_per_sale
        );
    }

    println!("\n{}", "By Region".bold());
    for row in engine.region_revenue(spec)? {
        println!("  {:<14} revenue ${:>12.2}", row.region, row.revenue);
    }

    println!("\n{}", "Top Customers by Revenue".bold());
    for (i, row) in engine
        .customers_by_revenue(spec, RankOrder::Top)?
        .iter()
        .enumerate()
    {
        println!("  {}. {:<24} ${:.2}", i + 1, row.label, row.revenue);
    }

    Ok(())
}

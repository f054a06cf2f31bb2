//! Project cumulative rental cost for one set of inputs
//!
//! Prints a year-by-year table with a summary, or CSV/JSON for other tools.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use inflation_projection::{
    api::check_horizon_limit, format_currency, project_request, report::write_points_csv, CalculatorConfig,
    ProjectionSummary,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "project", about = "Cumulative cost of renting under inflation")]
struct Args {
    /// Yearly rental spend (defaults to the config value)
    #[arg(long)]
    spend: Option<f64>,

    /// Annual growth rate, e.g. 0.04 (defaults to the config value)
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Years to project (defaults to the config value)
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i64>,

    /// JSON calculator config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Calendar year of projection year 1 (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Nights per year used for the renter/owner comparison
    #[arg(long, default_value_t = 14)]
    nights: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    start_year: i32,
    points: &'a [inflation_projection::ProjectionPoint],
    summary: &'a ProjectionSummary,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let mut request = config.request_for(args.spend, args.years);
    if let Some(rate) = args.rate {
        request.annual_growth_rate = rate;
    }

    check_horizon_limit(request.horizon_years)?;
    let points = project_request(&request).context("projection rejected")?;
    let summary = ProjectionSummary::from_points(&request, &points)?;
    let start_year = args.start_year.unwrap_or_else(|| chrono::Local::now().year());

    match args.format {
        OutputFormat::Csv => {
            write_points_csv(std::io::stdout().lock(), &points, Some(start_year))?;
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                start_year,
                points: &points,
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!(
                "Yearly spend {} growing {:.2}% per year over {} years",
                format_currency(request.annual_base_cost),
                request.annual_growth_rate * 100.0,
                summary.horizon_years
            );
            println!("{:<6} {:<8} {:>16}", "Year", "Cal", "Cumulative");
            for point in &points {
                println!(
                    "{:<6} {:<8} {:>16}",
                    point.year,
                    i64::from(start_year) + i64::from(point.year) - 1,
                    format_currency(point.cumulative_cost)
                );
            }

            println!("\nSummary:");
            println!("  Total spent on rentals: {}", summary.final_cumulative_display);
            println!("  Final year cost:        {}", format_currency(summary.final_year_cost));
            println!("  Without inflation:      {}", format_currency(summary.flat_cumulative_cost));
            println!("  Added by inflation:     {}", format_currency(summary.inflation_premium));
            if let Some(years) = summary.doubling_time_years {
                println!("  Cost doubles every:     {:.1} years", years);
            }

            let rates = config.nightly_rates;
            println!(
                "\nRenter {}/night vs owner {}/night: {} saved over {} nights",
                format_currency(rates.renter_nightly),
                format_currency(rates.owner_nightly),
                format_currency(rates.annual_savings(args.nights)),
                args.nights
            );
            if let Some(ratio) = rates.cost_ratio() {
                println!("  Renting costs {:.1}x owning per night", ratio);
            }
            if let Some(nights) = rates.nights_for_spend(request.annual_base_cost) {
                println!(
                    "  {} buys {:.0} rented nights a year",
                    format_currency(request.annual_base_cost),
                    nights
                );
            }
        }
    }

    Ok(())
}

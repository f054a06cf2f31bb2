//! CSV output for single projections and scenario batches

use crate::projection::ProjectionPoint;
use crate::scenario::ScenarioResult;
use std::io::Write;

/// Write projection points as CSV
///
/// With `start_year`, a `calendar_year` column maps projection year 1 to that
/// calendar year.
pub fn write_points_csv<W: Write>(
    writer: W,
    points: &[ProjectionPoint],
    start_year: Option<i32>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    match start_year {
        Some(_) => wtr.write_record(["year", "calendar_year", "cumulative_cost"])?,
        None => wtr.write_record(["year", "cumulative_cost"])?,
    }

    for point in points {
        let cumulative = format!("{:.2}", point.cumulative_cost);
        match start_year {
            Some(start) => {
                let calendar_year = i64::from(start) + i64::from(point.year) - 1;
                wtr.write_record([
                    point.year.to_string(),
                    calendar_year.to_string(),
                    cumulative,
                ])?;
            }
            None => wtr.write_record([point.year.to_string(), cumulative])?,
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write one row per scenario with its headline figures or its error
pub fn write_results_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "name",
        "annual_base_cost",
        "annual_growth_rate",
        "horizon_years",
        "final_cumulative_cost",
        "final_year_cost",
        "inflation_premium",
        "error",
    ])?;

    for result in results {
        let request = &result.request;
        let mut record = vec![
            result.name.clone(),
            request.annual_base_cost.to_string(),
            request.annual_growth_rate.to_string(),
            request.horizon_years.to_string(),
        ];
        match &result.outcome {
            Ok(projection) => {
                let summary = &projection.summary;
                record.push(format!("{:.2}", summary.final_cumulative_cost));
                record.push(format!("{:.2}", summary.final_year_cost));
                record.push(format!("{:.2}", summary.inflation_premium));
                record.push(String::new());
            }
            Err(e) => {
                record.extend([String::new(), String::new(), String::new(), e.to_string()]);
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

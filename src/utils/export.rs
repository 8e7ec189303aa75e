//! Result sink: CSV export and time-series extraction.
//!
//! The CSV layout is fixed: header `Algorithm,ArrayType,Size,TimeMs`, then
//! one row per result in log order, time written with full precision.

use std::io::Write;
use std::path::Path;

use crate::error::Result;

use super::timer::{TrialResult, Workload};

/// CSV header columns
pub const CSV_HEADER: [&str; 4] = ["Algorithm", "ArrayType", "Size", "TimeMs"];

/// Write `results` as CSV to any writer
pub fn write_csv<W: Write>(writer: W, results: &[TrialResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for result in results {
        // Display for f64 is the shortest exact round-trip, never exponent form
        wtr.write_record([
            result.algorithm().to_string(),
            result.workload().to_string(),
            result.size().to_string(),
            result.time_ms().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export results to a CSV file, replacing it if it exists
pub fn export_csv(path: impl AsRef<Path>, results: &[TrialResult]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), results)
}

/// `(size, time_ms)` points for one candidate on one workload, in log order.
///
/// This is the series a plotting collaborator draws per candidate.
pub fn series_for(results: &[TrialResult], algorithm: &str, workload: Workload) -> Vec<(u64, f64)> {
    results
        .iter()
        .filter(|r| r.algorithm() == algorithm && r.workload() == workload)
        .map(|r| (r.size(), r.time_ms()))
        .collect()
}

//! Coverage threshold gate.
//!
//! A pure decision step with no side effects: reads the aggregate coverage
//! percentage from the JSON report the test stage produced and fails the
//! pipeline when it is strictly below the fixed threshold. The failure
//! message cites both the threshold and the measured value.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::ProjectLayout;
use crate::constants;
use crate::core::RelgateError;

/// Subset of the coverage tool's JSON report the gate consumes.
#[derive(Debug, Deserialize)]
struct CoverageReport {
    totals: CoverageTotals,
}

#[derive(Debug, Deserialize)]
struct CoverageTotals {
    percent_covered: f64,
}

/// Reads the aggregate covered percentage from a JSON coverage report.
pub fn read_percent_covered(path: &Path) -> Result<f64> {
    if !path.exists() {
        return Err(RelgateError::CoverageReportMissing {
            path: path.display().to_string(),
        }
        .into());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))?;
    let report: CoverageReport = serde_json::from_str(&raw).map_err(|e| {
        RelgateError::CoverageReportInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(report.totals.percent_covered)
}

/// Fails when `measured` is strictly below `required`.
pub fn enforce_threshold(measured: f64, required: f64) -> Result<()> {
    if measured < required {
        return Err(RelgateError::CoverageBelowThreshold {
            required,
            measured,
        }
        .into());
    }
    tracing::info!(target: "coverage", "coverage {measured:.1}% meets the {required:.1}% threshold");
    Ok(())
}

/// Runs the gate against the report the test stage wrote.
pub async fn run(layout: &ProjectLayout) -> Result<()> {
    let measured = read_percent_covered(&layout.coverage_report)?;
    enforce_threshold(measured, constants::COVERAGE_THRESHOLD)
}

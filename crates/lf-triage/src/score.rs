//! Reduction of one result's telemetry to a comparable number.

use lf_types::{LfError, LfResult, SimulationResult};

/// Mean forward (x) velocity over the recorded window.
pub fn score(result: &SimulationResult) -> LfResult<f64> {
    mean(&result.spex).ok_or_else(|| LfError::EmptyTimeSeries {
        series: "spex".to_string(),
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

//! Simulation result records written by the external simulator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CandidateConfig;

/// Interpretation of the integer `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    BadRotation,
    TooLong,
    BadBehavior,
    Unknown(i64),
}

impl RunStatus {
    pub const SUCCESS_CODE: i64 = 0;

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::BadRotation,
            2 => Self::TooLong,
            3 => Self::BadBehavior,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Success => 0,
            Self::BadRotation => 1,
            Self::TooLong => 2,
            Self::BadBehavior => 3,
            Self::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Success => "no error",
            Self::BadRotation => "rotation took too long",
            Self::TooLong => "transition took too long",
            Self::BadBehavior => "bad robot behavior",
            Self::Unknown(_) => "unknown failure",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}

/// Telemetry and outcome of one simulated run.
///
/// All seven series are sampled at the same instants and share one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub status: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_string: Option<String>,
    pub definition: CandidateConfig,
    pub time: Vec<f64>,
    pub posx: Vec<f64>,
    pub posy: Vec<f64>,
    pub spex: Vec<f64>,
    pub spey: Vec<f64>,
    /// Degrees.
    pub bodyangle: Vec<f64>,
    /// Degrees.
    pub engineangle: Vec<f64>,
}

impl SimulationResult {
    pub fn run_status(&self) -> RunStatus {
        RunStatus::from_code(self.status)
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::SUCCESS_CODE
    }

    /// Number of telemetry samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Named series, in persisted order.
    pub fn series(&self) -> [(&'static str, &[f64]); 7] {
        [
            ("time", self.time.as_slice()),
            ("posx", self.posx.as_slice()),
            ("posy", self.posy.as_slice()),
            ("spex", self.spex.as_slice()),
            ("spey", self.spey.as_slice()),
            ("bodyangle", self.bodyangle.as_slice()),
            ("engineangle", self.engineangle.as_slice()),
        ]
    }

    /// Returns the first series whose length differs from `time`, if any.
    pub fn mismatched_series(&self) -> Option<(&'static str, usize)> {
        let expected = self.time.len();
        self.series()
            .into_iter()
            .find(|(_, values)| values.len() != expected)
            .map(|(name, values)| (name, values.len()))
    }
}

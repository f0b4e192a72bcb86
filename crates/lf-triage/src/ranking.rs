//! Leaderboard ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

use lf_types::CandidateConfig;

/// One scored result, alive only for the duration of a triage run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub score: f64,
    pub config: CandidateConfig,
    pub source_path: PathBuf,
}

impl RankedEntry {
    pub fn new(score: f64, config: CandidateConfig, source_path: impl Into<PathBuf>) -> Self {
        Self {
            score,
            config,
            source_path: source_path.into(),
        }
    }
}

/// Sort by score, best first.
///
/// The sort is stable: equal scores keep their input order. NaN scores sink
/// below every real score.
pub fn rank(mut entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| descending(a.score, b.score));
    entries
}

/// The first `k` entries, or all of them when there are fewer.
pub fn top(ranked: &[RankedEntry], k: usize) -> &[RankedEntry] {
    &ranked[..k.min(ranked.len())]
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

//! # lf-triage
//!
//! Offline triage of simulation results for LegForge.
//!
//! Walks a run tree for result records, scores each by mean forward speed,
//! ranks them, prints a leaderboard and archives the best source files.

pub mod archive;
pub mod collector;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod score;

pub use archive::{archive, Archiver, DEFAULT_PREFIX};
pub use collector::{collect, CollectorConfig, ResultCollector};
pub use pipeline::{
    run_triage, score_all, TriageConfig, TriageOutcome, DEFAULT_ARCHIVE_DIR,
    DEFAULT_HISTOGRAM_FILE, DEFAULT_TOP_K,
};
pub use ranking::{rank, top, RankedEntry};
pub use report::{Histogram, HistogramConfig, Leaderboard, LeaderboardRow};
pub use score::score;

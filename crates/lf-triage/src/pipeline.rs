//! End-to-end triage run: collect, score, rank, report, archive.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use lf_types::{LfResult, SimulationResult};

use crate::archive::{Archiver, DEFAULT_PREFIX};
use crate::collector::{CollectorConfig, ResultCollector};
use crate::ranking::{rank, top, RankedEntry};
use crate::report::{Histogram, HistogramConfig, Leaderboard};
use crate::score::score;

/// Number of champions kept when nothing else is configured.
pub const DEFAULT_TOP_K: usize = 30;
pub const DEFAULT_ARCHIVE_DIR: &str = "champions";
pub const DEFAULT_HISTOGRAM_FILE: &str = "scores.svg";

/// Settings for one triage run.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageConfig {
    pub root: PathBuf,
    pub top_k: usize,
    pub collector: CollectorConfig,
    /// Destination wiped and refilled with the top entries; `None` skips archiving.
    pub archive_dir: Option<PathBuf>,
    pub archive_prefix: String,
    /// Histogram output path; `None` skips the histogram.
    pub histogram_path: Option<PathBuf>,
    pub histogram: HistogramConfig,
    pub leaderboard_json: Option<PathBuf>,
    pub show_definitions: bool,
}

impl TriageConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            top_k: DEFAULT_TOP_K,
            collector: CollectorConfig::default(),
            archive_dir: Some(PathBuf::from(DEFAULT_ARCHIVE_DIR)),
            archive_prefix: DEFAULT_PREFIX.to_string(),
            histogram_path: Some(PathBuf::from(DEFAULT_HISTOGRAM_FILE)),
            histogram: HistogramConfig::default(),
            leaderboard_json: None,
            show_definitions: false,
        }
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    pub fn with_collector(mut self, collector: CollectorConfig) -> Self {
        self.collector = collector;
        self
    }

    pub fn with_archive(mut self, dir: Option<PathBuf>, prefix: impl Into<String>) -> Self {
        self.archive_dir = dir;
        self.archive_prefix = prefix.into();
        self
    }

    pub fn with_histogram(mut self, path: Option<PathBuf>, config: HistogramConfig) -> Self {
        self.histogram_path = path;
        self.histogram = config;
        self
    }

    pub fn with_leaderboard_json(mut self, path: Option<PathBuf>) -> Self {
        self.leaderboard_json = path;
        self
    }

    pub fn with_definitions(mut self, show: bool) -> Self {
        self.show_definitions = show;
        self
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageOutcome {
    pub leaderboard: Leaderboard,
    pub ranked: Vec<RankedEntry>,
    pub archived: Vec<PathBuf>,
    pub histogram: Option<Histogram>,
}

/// Score every collected result. The first unscorable result fails the batch.
pub fn score_all(collected: Vec<(PathBuf, SimulationResult)>) -> LfResult<Vec<RankedEntry>> {
    collected
        .into_iter()
        .map(|(path, result)| match score(&result) {
            Ok(value) => Ok(RankedEntry::new(value, result.definition, path)),
            Err(e) => {
                error!("Cannot score {}: {}", path.display(), e);
                Err(e)
            }
        })
        .collect()
}

/// Run the whole pipeline, printing the leaderboard to `out`.
///
/// Nothing is printed or written unless every record under the root was
/// collected and scored.
pub fn run_triage<W: Write>(config: &TriageConfig, out: &mut W) -> LfResult<TriageOutcome> {
    info!("Starting triage of {}", config.root.display());
    config.histogram.validate()?;

    let collected = ResultCollector::new(config.collector.clone()).collect(&config.root)?;
    let total = collected.len();
    let ranked = rank(score_all(collected)?);
    let champions = top(&ranked, config.top_k);

    let leaderboard = Leaderboard::new(&config.root, total, champions);
    leaderboard.print(out, config.show_definitions)?;

    if let Some(path) = &config.leaderboard_json {
        leaderboard.write_json(path)?;
    }

    let histogram = match &config.histogram_path {
        Some(path) => {
            let scores: Vec<f64> = ranked.iter().map(|e| e.score).collect();
            let histogram = Histogram::from_scores(&scores, config.histogram)?;
            histogram.write_svg(path)?;
            Some(histogram)
        }
        None => None,
    };

    let archived = match &config.archive_dir {
        Some(dir) => {
            let sources: Vec<PathBuf> = ranked.iter().map(|e| e.source_path.clone()).collect();
            archive_into(champions, &sources, dir, &config.archive_prefix)?
        }
        None => Vec::new(),
    };

    info!(
        "Triage complete: {} results, {} champions, {} archived",
        total,
        champions.len(),
        archived.len()
    );

    Ok(TriageOutcome {
        leaderboard,
        ranked,
        archived,
        histogram,
    })
}

/// Every collected source is protected from the wipe, not only the champions.
fn archive_into(
    entries: &[RankedEntry],
    sources: &[PathBuf],
    dir: &Path,
    prefix: &str,
) -> LfResult<Vec<PathBuf>> {
    Archiver::new(prefix).archive_guarded(entries, sources, dir)
}

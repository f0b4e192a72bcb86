use anyhow::Result;
use clap::Parser;
use lf_triage::{
    run_triage, CollectorConfig, HistogramConfig, TriageConfig, DEFAULT_ARCHIVE_DIR,
    DEFAULT_HISTOGRAM_FILE, DEFAULT_PREFIX, DEFAULT_TOP_K,
};
use lf_types::RECORD_MARKER;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lf-triage")]
#[command(about = "Rank simulation results by mean forward speed and archive the champions")]
struct Cli {
    /// Directory tree holding the simulator's result records
    root: PathBuf,
    /// How many champions to print and archive
    #[arg(long, env = "LF_TOP_K", default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
    /// Substring identifying result files
    #[arg(long, env = "LF_MARKER", default_value = RECORD_MARKER)]
    marker: String,
    /// Sort sibling entries by name while walking, for reproducible tie order
    #[arg(long, env = "LF_SORT_PATHS", default_value_t = false)]
    sort_paths: bool,
    /// Archive directory. WIPED and recreated on every run
    #[arg(long, env = "LF_ARCHIVE_DIR", default_value = DEFAULT_ARCHIVE_DIR)]
    archive_dir: PathBuf,
    #[arg(long, env = "LF_ARCHIVE_PREFIX", default_value = DEFAULT_PREFIX)]
    archive_prefix: String,
    #[arg(long, default_value_t = false)]
    no_archive: bool,
    /// Score histogram image
    #[arg(long, env = "LF_HISTOGRAM", default_value = DEFAULT_HISTOGRAM_FILE)]
    histogram: PathBuf,
    #[arg(long, default_value_t = false)]
    no_histogram: bool,
    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    histogram_low: f64,
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    histogram_high: f64,
    #[arg(long, default_value_t = 40)]
    histogram_bins: usize,
    /// Also write the leaderboard as JSON
    #[arg(long, env = "LF_LEADERBOARD_JSON")]
    leaderboard_json: Option<PathBuf>,
    /// Print each champion's configuration under its line
    #[arg(long, default_value_t = false)]
    show_definitions: bool,
}

impl Cli {
    fn into_config(self) -> TriageConfig {
        let histogram = HistogramConfig {
            low: self.histogram_low,
            high: self.histogram_high,
            bins: self.histogram_bins,
        };
        TriageConfig::new(self.root)
            .with_top_k(self.top_k)
            .with_collector(
                CollectorConfig::default()
                    .with_marker(self.marker)
                    .with_sorted_paths(self.sort_paths),
            )
            .with_archive(
                (!self.no_archive).then_some(self.archive_dir),
                self.archive_prefix,
            )
            .with_histogram((!self.no_histogram).then_some(self.histogram), histogram)
            .with_leaderboard_json(self.leaderboard_json)
            .with_definitions(self.show_definitions)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    let stdout = std::io::stdout();
    run_triage(&config, &mut stdout.lock())?;
    Ok(())
}

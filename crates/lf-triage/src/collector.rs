//! Directory-wide collection of simulation results.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use lf_types::{is_record_name, read_record, LfError, LfResult, SimulationResult, RECORD_MARKER};

/// Collection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Substring a file name must contain to be loaded.
    pub marker: String,
    /// Sort directory entries by file name. Off by default, in which case the
    /// order is whatever the filesystem yields.
    pub sort_paths: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            marker: RECORD_MARKER.to_string(),
            sort_paths: false,
        }
    }
}

impl CollectorConfig {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_sorted_paths(mut self, sort_paths: bool) -> Self {
        self.sort_paths = sort_paths;
        self
    }
}

/// Walks a run tree and loads every result record in it.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    config: CollectorConfig,
}

impl ResultCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Paths of every file under `root` whose name carries the marker.
    pub fn discover(&self, root: &Path) -> LfResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(LfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("result root {} is not a directory", root.display()),
            )));
        }

        let mut walker = WalkDir::new(root);
        if self.config.sort_paths {
            walker = walker.sort_by_file_name();
        }

        let mut found = Vec::new();
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            // Symlinked files count; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }
            if is_record_name(&entry.file_name().to_string_lossy(), &self.config.marker) {
                found.push(entry.into_path());
            }
        }
        Ok(found)
    }

    /// Load every result under `root`.
    ///
    /// Aborts on the first record that fails to parse or whose status is not
    /// success; no partial collection is returned in either case.
    pub fn collect(&self, root: &Path) -> LfResult<Vec<(PathBuf, SimulationResult)>> {
        let paths = self.discover(root)?;
        info!("found {} results under {}", paths.len(), root.display());

        let total = paths.len();
        let mut collected = Vec::with_capacity(total);
        for (index, path) in paths.into_iter().enumerate() {
            debug!("{}/{} {}", index, total, path.display());
            let result: SimulationResult = read_record(&path)?;

            if !result.is_success() {
                let status = result.run_status();
                warn!("Aborting collection: {} has status {}", path.display(), status);
                return Err(LfError::NonSuccessStatus {
                    path,
                    status: status.code(),
                    description: result
                        .status_string
                        .clone()
                        .unwrap_or_else(|| status.description().to_string()),
                });
            }

            if let Some((series, len)) = result.mismatched_series() {
                return Err(LfError::parse(
                    &path,
                    format!(
                        "series '{series}' has {len} samples, 'time' has {}",
                        result.time.len()
                    ),
                ));
            }

            collected.push((path, result));
        }

        Ok(collected)
    }
}

/// Collect with default settings.
pub fn collect(root: &Path) -> LfResult<Vec<(PathBuf, SimulationResult)>> {
    ResultCollector::default().collect(root)
}

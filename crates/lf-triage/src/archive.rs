//! Rank-ordered archive of the best result files.
//!
//! Archiving is DESTRUCTIVE: the destination directory is deleted and
//! recreated on every call, so anything stored there before is lost.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use lf_types::{archive_error, LfResult};

use crate::ranking::RankedEntry;

/// File name prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "champion";

/// Copies ranked source files into a fresh directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archiver {
    prefix: String,
}

impl Default for Archiver {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Archiver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Archive name for rank `index` out of `total` entries.
    ///
    /// The index is zero-padded to at least two digits, wider when needed, so
    /// lexical order equals rank order.
    pub fn file_name(&self, index: usize, total: usize) -> String {
        let width = total.saturating_sub(1).to_string().len().max(2);
        format!("{}.{:0width$}", self.prefix, index, width = width)
    }

    /// Wipe `dest_dir`, recreate it and copy each entry's source file in rank
    /// order. Returns the written paths.
    pub fn archive(&self, entries: &[RankedEntry], dest_dir: &Path) -> LfResult<Vec<PathBuf>> {
        let sources: Vec<PathBuf> = entries.iter().map(|e| e.source_path.clone()).collect();
        self.archive_guarded(entries, &sources, dest_dir)
    }

    /// Like [`Archiver::archive`], but refuses to wipe `dest_dir` when any of
    /// `protected` lies inside it, archived or not.
    pub fn archive_guarded(
        &self,
        entries: &[RankedEntry],
        protected: &[PathBuf],
        dest_dir: &Path,
    ) -> LfResult<Vec<PathBuf>> {
        if dest_dir.exists() {
            if !dest_dir.is_dir() {
                return Err(archive_error!(
                    "archive destination {} exists and is not a directory",
                    dest_dir.display()
                ));
            }
            ensure_none_inside(protected, dest_dir)?;
            warn!("Wiping archive directory {}", dest_dir.display());
            std::fs::remove_dir_all(dest_dir)?;
        }
        std::fs::create_dir_all(dest_dir)?;

        let mut written = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let target = dest_dir.join(self.file_name(index, entries.len()));
            std::fs::copy(&entry.source_path, &target)?;
            debug!("{} -> {}", entry.source_path.display(), target.display());
            written.push(target);
        }

        info!("Archived {} results into {}", written.len(), dest_dir.display());
        Ok(written)
    }
}

fn ensure_none_inside(protected: &[PathBuf], dest_dir: &Path) -> LfResult<()> {
    let dest = dest_dir.canonicalize()?;
    for path in protected {
        if path.canonicalize()?.starts_with(&dest) {
            return Err(archive_error!(
                "refusing to wipe {}: it contains source {}",
                dest_dir.display(),
                path.display()
            ));
        }
    }
    Ok(())
}

/// Archive with the default prefix.
pub fn archive(entries: &[RankedEntry], dest_dir: &Path) -> LfResult<Vec<PathBuf>> {
    Archiver::default().archive(entries, dest_dir)
}

//! Candidate generation: draw or pick a configuration and write it out.

use rand::RngCore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use lf_types::{write_record, CandidateConfig, LfError, LfResult, DEFINITION_FILE};

use crate::search::RandomSearch;
use crate::space::{config_from_parameters, preset, presets, random_space};

/// How a candidate is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerMode {
    /// Deterministic preset, addressed by its index in the preset grid.
    Fixed { preset: usize },
    /// Independent uniform draw from the bounded design space.
    Random,
}

/// What a batch run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPlan {
    /// Every fixed-mode preset, once.
    PresetGrid,
    /// `count` independent random draws.
    Random { count: usize },
}

/// Produce one candidate without touching the filesystem.
pub fn sample<R: RngCore + ?Sized>(mode: SamplerMode, rng: &mut R) -> LfResult<CandidateConfig> {
    let config = match mode {
        SamplerMode::Fixed { preset: index } => preset(index)?,
        SamplerMode::Random => {
            let mut search = RandomSearch::new(random_space(), rng);
            config_from_parameters(&search.sample_one())?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Produce one candidate and write it to `destination`.
///
/// An existing file at `destination` is overwritten without warning.
pub fn generate<R: RngCore + ?Sized>(
    mode: SamplerMode,
    destination: &Path,
    rng: &mut R,
) -> LfResult<CandidateConfig> {
    let config = sample(mode, rng)?;
    write_config(destination, &config)?;
    info!("Wrote {:?} candidate to {}", mode, destination.display());
    Ok(config)
}

/// Write a batch of candidates as `out_dir/<NNNN>/definition.pck`.
///
/// Returns the written definition paths in generation order.
pub fn generate_batch<R: RngCore + ?Sized>(
    plan: BatchPlan,
    out_dir: &Path,
    rng: &mut R,
) -> LfResult<Vec<PathBuf>> {
    let configs = match plan {
        BatchPlan::PresetGrid => presets()?,
        BatchPlan::Random { count } => {
            let mut search = RandomSearch::new(random_space(), rng);
            search
                .suggest(count)
                .iter()
                .map(config_from_parameters)
                .collect::<LfResult<Vec<_>>>()?
        }
    };

    let mut written = Vec::with_capacity(configs.len());
    for (index, config) in configs.iter().enumerate() {
        config.validate()?;
        let run_dir = out_dir.join(format!("{index:04}"));
        std::fs::create_dir_all(&run_dir).map_err(|source| LfError::ConfigWrite {
            path: run_dir.clone(),
            source,
        })?;
        let path = run_dir.join(DEFINITION_FILE);
        write_config(&path, config)?;
        debug!("Wrote candidate {} to {}", index, path.display());
        written.push(path);
    }

    info!("Wrote {} candidates under {}", written.len(), out_dir.display());
    Ok(written)
}

fn write_config(path: &Path, config: &CandidateConfig) -> LfResult<()> {
    write_record(path, config).map_err(|source| LfError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

//! # lf-sampler
//!
//! Candidate-configuration generation for LegForge.
//!
//! Provides the design space definition, grid and random sweep strategies,
//! and the generation entry points that write configuration records for the
//! external simulator.

mod sampler;
mod search;
mod space;

pub use sampler::{generate, generate_batch, sample, BatchPlan, SamplerMode};
pub use search::{
    GridSearch, ParameterDef, ParameterKind, ParameterSet, ParameterValue, RandomSearch,
    SearchSpace,
};
pub use space::{base_config, config_from_parameters, preset, preset_space, presets, random_space};

use anyhow::Result;
use clap::{Parser, Subcommand};
use lf_sampler::{generate, generate_batch, presets, BatchPlan, SamplerMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lf-generate")]
#[command(about = "Write candidate mechanism configurations for the external simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write one deterministic preset
    Fixed {
        destination: PathBuf,
        /// Index into the preset grid (see `presets`)
        #[arg(long, default_value_t = 0)]
        preset: usize,
    },
    /// Write one randomly drawn candidate
    Random {
        destination: PathBuf,
        /// Seed for the random source; drawn from entropy when absent
        #[arg(long, env = "LF_SEED")]
        seed: Option<u64>,
    },
    /// Write many candidates as <OUT_DIR>/<NNNN>/definition.pck
    Batch {
        out_dir: PathBuf,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, env = "LF_SEED")]
        seed: Option<u64>,
        /// Write the whole preset grid instead of random draws
        #[arg(long, default_value_t = false)]
        grid: bool,
    },
    /// List the fixed-mode presets
    Presets {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fixed {
            destination,
            preset,
        } => {
            // presets never draw
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let config = generate(SamplerMode::Fixed { preset }, &destination, &mut rng)?;
            println!("{config}");
        }
        Commands::Random { destination, seed } => {
            let mut rng = seeded_rng(seed);
            let config = generate(SamplerMode::Random, &destination, &mut rng)?;
            println!("{config}");
        }
        Commands::Batch {
            out_dir,
            count,
            seed,
            grid,
        } => {
            let plan = if grid {
                BatchPlan::PresetGrid
            } else {
                BatchPlan::Random { count }
            };
            let mut rng = seeded_rng(seed);
            let written = generate_batch(plan, &out_dir, &mut rng)?;
            println!("wrote {} candidates under {}", written.len(), out_dir.display());
        }
        Commands::Presets { json } => {
            let all = presets()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for (index, config) in all.iter().enumerate() {
                    println!("#{index:02} mainLength={} legAngle={:.0}deg footHeight={} legNumber={}",
                        config.main_length,
                        config.leg_angle_degrees(),
                        config.foot_height,
                        config.leg_number,
                    );
                }
            }
        }
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| {
        let drawn = rand::random::<u64>();
        info!("No seed given, using {drawn}");
        drawn
    });
    ChaCha8Rng::seed_from_u64(seed)
}

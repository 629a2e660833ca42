use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_env::env::IdAllocator;
use snake_env::game::{EnvConfig, IdPolicy, ObservationMode};
use snake_env::modes::{HumanMode, RandomConfig, RandomMode};

#[derive(Parser)]
#[command(name = "snake-env")]
#[command(version, about = "Gym-style Snake environment")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Environment name label
    #[arg(long, default_value = "snake")]
    name: String,

    /// Environment id: "auto" or a fixed number
    #[arg(long, default_value = "auto")]
    id: IdPolicy,

    /// Observation mode: "maths" or "image"
    #[arg(long, default_value = "maths")]
    observation: ObservationMode,

    /// Board width in pixels
    #[arg(long, default_value = "800")]
    width: i32,

    /// Board height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Cell size in pixels
    #[arg(long, default_value = "20")]
    cell: i32,

    /// Seed for deterministic apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Episodes to roll in random mode
    #[arg(long, default_value = "100")]
    episodes: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Roll episodes with a random policy
    Random,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = EnvConfig {
        name: cli.name,
        id: cli.id,
        observation_mode: cli.observation,
        board_width: cli.width,
        board_height: cli.height,
        cell_size: cli.cell,
        seed: cli.seed,
        ..EnvConfig::default()
    };
    let ids = IdAllocator::new();

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, &ids)?;
            human_mode.run().await?;
        }
        Mode::Random => {
            let random_config = RandomConfig {
                num_episodes: cli.episodes,
                ..RandomConfig::default()
            };
            let mut random_mode = RandomMode::new(config, random_config, &ids)?;
            random_mode.run()?;
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tactical_connect_four::ai::build_agent;
use tactical_connect_four::arena::Arena;
use tactical_connect_four::config::AppConfig;

/// Pit two Connect Four agents against each other and report win rates.
#[derive(Parser)]
#[command(name = "arena", about = "Play Connect Four matches between agents")]
struct Cli {
    /// Agent for side A: tactical or random
    #[arg(long)]
    agent: Option<String>,

    /// Agent for side B: tactical or random
    #[arg(long)]
    opponent: Option<String>,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Override base RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Emit the final report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(agent) = cli.agent {
        config.matchup.agent = agent;
    }
    if let Some(opponent) = cli.opponent {
        config.matchup.opponent = opponent;
    }
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        config.arena.base_seed = seed;
    }
    if cli.no_progress || cli.json {
        config.arena.progress = false;
    }
    config.validate()?;

    let seed = config.arena.base_seed;
    let mut agent_a = build_agent(&config.matchup.agent, seed)?;
    let mut agent_b = build_agent(&config.matchup.opponent, seed.wrapping_add(1))?;

    let arena = Arena::new(config.arena.clone());
    let report = arena.run(agent_a.as_mut(), agent_b.as_mut())?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        println!("{report}");
    }
    Ok(())
}

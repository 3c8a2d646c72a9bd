//! Memory Match CLI
//!
//! Terminal front-end over the `mm_core` round engine. Handles player name
//! entry, interactive rounds and the high-score listing.

mod play;
mod profile;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mm_core::{FileScoreStore, PlayerIdentity, ScoreStore};
use profile::FilePlayerIdentity;

#[derive(Parser)]
#[command(name = "mm_cli")]
#[command(about = "Play memory match in the terminal", long_about = None)]
struct Cli {
    /// Directory holding the profile and high-score files
    #[arg(long, default_value = "saves")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a round
    Play {
        /// Number of matching pairs on the board
        #[arg(long, default_value = "8")]
        pairs: usize,

        /// Fixed shuffle seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List saved high scores, best first
    Scores,

    /// Set the player name used for new scores
    Name { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let profile_path = cli.data_dir.join("profile.json");
    let scores_path = cli.data_dir.join("high_scores.json");

    match cli.command {
        Commands::Play { pairs, seed } => {
            let mut identity = FilePlayerIdentity::load(&profile_path)?;
            let player_name = match identity.name() {
                Some(name) => name,
                None => {
                    let name = play::prompt_name()?;
                    identity.set_name(name.clone());
                    identity.save()?;
                    name
                }
            };
            play::run(pairs, seed, &player_name, &scores_path)
        }

        Commands::Scores => {
            let store = FileScoreStore::new(&scores_path);
            let table = store.load()?;
            if table.entries.is_empty() {
                println!("No high scores saved yet.");
                return Ok(());
            }

            println!("{:<4} {:<20} {:>9}", "#", "Name", "Time");
            for (rank, entry) in table.sorted_by_time().iter().enumerate() {
                println!("{:<4} {:<20} {:>8.2}s", rank + 1, entry.name, entry.time_seconds);
            }
            Ok(())
        }

        Commands::Name { name } => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                anyhow::bail!("player name must not be empty");
            }
            let mut identity = FilePlayerIdentity::load(&profile_path)?;
            identity.set_name(trimmed.to_string());
            identity.save()?;
            println!("Player name set to {}", trimmed);
            Ok(())
        }
    }
}

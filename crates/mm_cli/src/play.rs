//! Interactive round loop
//!
//! The engine stays pure: wall-clock time is sampled here at the edge and
//! fed in as tick deltas, and all rendering happens through a
//! `RoundObserver` printing to the terminal.

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use mm_core::{CardId, CardState, FileScoreStore, RoundConfig, RoundEngine, RoundObserver};

const BOARD_COLUMNS: usize = 4;

struct TerminalObserver;

impl RoundObserver for TerminalObserver {
    fn on_pair_matched(&mut self, _first: usize, _second: usize, _id: CardId) {
        println!("Matching cards found!");
    }

    fn on_pair_mismatched(&mut self, _first: usize, _second: usize) {
        println!("Not a match...");
    }

    fn on_pairs_left(&mut self, remaining: usize) {
        println!("Pairs left: {}", remaining);
    }

    fn on_game_over(&mut self, final_time: f32) {
        println!("Final time: {:.2}", final_time);
    }
}

/// Ask for a player name until a non-empty one is entered.
pub fn prompt_name() -> Result<String> {
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            anyhow::bail!("no name entered");
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        println!("A name is required to start.");
    }
}

pub fn run(pairs: usize, seed: Option<u64>, player_name: &str, scores_path: &Path) -> Result<()> {
    let config = RoundConfig { pairs_count: pairs, seed, ..RoundConfig::default() };
    let mismatch_delay = config.mismatch_delay;
    let mut engine = RoundEngine::new(config)?.with_observer(Box::new(TerminalObserver));

    println!("Player: {}", player_name);
    println!("Flip cards two at a time and find every pair.");

    let mut last_tick = Instant::now();
    while engine.is_running() {
        engine.tick(last_tick.elapsed().as_secs_f32());
        last_tick = Instant::now();

        print_board(&engine);
        print!("card # (r = restart, q = quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "q" => return Ok(()),
            "r" => {
                engine.restart()?;
                last_tick = Instant::now();
            }
            input => match input.parse::<usize>() {
                Ok(index) => {
                    if !engine.reveal(index) {
                        println!("That card can't be flipped right now.");
                    }
                    if engine.has_pending_revert() {
                        // Leave the mismatch on screen for the configured
                        // delay before the board redraws face-down.
                        print_board(&engine);
                        std::thread::sleep(Duration::from_secs_f32(mismatch_delay));
                    }
                }
                Err(_) => println!("Enter a card number, 'r' or 'q'."),
            },
        }
    }

    engine.tick(last_tick.elapsed().as_secs_f32());
    print_board(&engine);
    let final_time = engine.final_time().unwrap_or_default();
    println!("You found every pair in {:.2} seconds!", final_time);

    print!("Save your score? [y/N]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    if line.trim().eq_ignore_ascii_case("y") {
        let mut store = FileScoreStore::new(scores_path);
        match engine.record_score(player_name, &mut store) {
            Ok(entry) => println!(
                "Saved {} - {:.2} to {}",
                entry.name,
                entry.time_seconds,
                store.path().display()
            ),
            Err(err) => println!("Could not save score: {}", err),
        }
    }

    Ok(())
}

fn print_board(engine: &RoundEngine) {
    println!();
    println!("Time: {:.2}   Pairs left: {}", engine.elapsed(), engine.pairs_remaining());

    for (row, chunk) in engine.cards().chunks(BOARD_COLUMNS).enumerate() {
        let mut cells = Vec::with_capacity(chunk.len());
        for (column, card) in chunk.iter().enumerate() {
            let index = row * BOARD_COLUMNS + column;
            let face = match card.state() {
                CardState::FaceDown => " ?".to_string(),
                CardState::Matched => format!("{:>2}", card.id()),
                CardState::FaceUp | CardState::FlipPending => format!("{:>2}", card.id()),
            };
            let marker = if card.state().is_matched() { '*' } else { ' ' };
            cells.push(format!("{:>2}:[{}]{}", index, face, marker));
        }
        println!("  {}", cells.join(" "));
    }
    println!();
}

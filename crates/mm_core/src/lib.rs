//! # mm_core - Deterministic Memory-Match Round Engine
//!
//! This library provides the full game logic for a memory-matching
//! ("concentration") card game, free of any rendering or widget code.
//!
//! ## Features
//! - 100% deterministic rounds (same seed + same inputs = same round)
//! - Per-card face state machine with input gating
//! - Two-slot reveal queue with cancellable mismatch revert timers
//! - Tick-driven round clock, frozen at the winning instant
//! - JSON-backed high-score persistence behind a narrow trait
//!
//! Presentation is plugged in through [`RoundObserver`]; the engine only
//! ever notifies, it never renders.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod identity;
pub mod matcher;
pub mod observer;
pub mod round;
pub mod score;

// Re-export the engine surface
pub use card::{Card, CardId, CardState};
pub use config::RoundConfig;
pub use deck::DeckBuilder;
pub use error::{GameError, Result};
pub use identity::{MemoryIdentity, PlayerIdentity};
pub use matcher::{Matcher, PairOutcome};
pub use observer::{NullObserver, RoundObserver};
pub use round::{RoundEngine, RoundEvent, RoundStats};
pub use score::{
    FileScoreStore, HighScoreEntry, HighScoreTable, MemoryScoreStore, ScoreStore, ScoreStoreError,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observer that records every notification it receives.
    #[derive(Debug, Default)]
    struct Recorder {
        revealed: Vec<usize>,
        hidden: Vec<usize>,
        matched: Vec<CardId>,
        mismatched: u32,
        pairs_left: Vec<usize>,
        game_over: Vec<f32>,
    }

    #[derive(Clone, Default)]
    struct SharedRecorder(Rc<RefCell<Recorder>>);

    impl RoundObserver for SharedRecorder {
        fn on_card_revealed(&mut self, index: usize, _id: CardId) {
            self.0.borrow_mut().revealed.push(index);
        }
        fn on_card_hidden(&mut self, index: usize) {
            self.0.borrow_mut().hidden.push(index);
        }
        fn on_pair_matched(&mut self, _first: usize, _second: usize, id: CardId) {
            self.0.borrow_mut().matched.push(id);
        }
        fn on_pair_mismatched(&mut self, _first: usize, _second: usize) {
            self.0.borrow_mut().mismatched += 1;
        }
        fn on_pairs_left(&mut self, remaining: usize) {
            self.0.borrow_mut().pairs_left.push(remaining);
        }
        fn on_game_over(&mut self, final_time: f32) {
            self.0.borrow_mut().game_over.push(final_time);
        }
    }

    fn indexes_of(engine: &RoundEngine, id: CardId) -> (usize, usize) {
        let found: Vec<usize> = engine
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| card.id() == id)
            .map(|(index, _)| index)
            .collect();
        (found[0], found[1])
    }

    #[test]
    fn test_eight_pair_scenario() {
        // Deck of 16 cards over 8 distinct identifiers.
        let config = RoundConfig { pairs_count: 8, seed: Some(20), ..RoundConfig::default() };
        let mut engine = RoundEngine::new(config).unwrap();
        assert_eq!(engine.cards().len(), 16);
        assert_eq!(engine.pairs_remaining(), 8);

        // Reveal both cards with identifier 3: pairs drop 8 -> 7, both Matched.
        let (a, b) = indexes_of(&engine, 3);
        assert!(engine.reveal(a));
        assert!(engine.reveal(b));
        assert_eq!(engine.pairs_remaining(), 7);
        assert!(engine.card(a).unwrap().state().is_matched());
        assert!(engine.card(b).unwrap().state().is_matched());

        // Reveal one card of identifier 2 and one of identifier 5: after the
        // delay both flip back, pairs unchanged at 7.
        let (c, _) = indexes_of(&engine, 2);
        let (d, _) = indexes_of(&engine, 5);
        assert!(engine.reveal(c));
        assert!(engine.reveal(d));
        engine.tick(1.0);

        assert_eq!(engine.pairs_remaining(), 7);
        assert!(!engine.card(c).unwrap().is_face_up());
        assert!(!engine.card(d).unwrap().is_face_up());
        assert!(engine.card(c).unwrap().accepts_input());
        assert!(engine.card(d).unwrap().accepts_input());
    }

    #[test]
    fn test_won_round_records_exact_final_time() {
        let recorder = SharedRecorder::default();
        let config = RoundConfig { pairs_count: 2, seed: Some(4), ..RoundConfig::default() };
        let mut engine =
            RoundEngine::new(config).unwrap().with_observer(Box::new(recorder.clone()));

        engine.tick(42.37);
        for id in 0..2 {
            let (a, b) = indexes_of(&engine, id);
            engine.reveal(a);
            engine.reveal(b);
        }

        assert!(!engine.is_running());
        assert_eq!(engine.final_time(), Some(42.37));

        let mut store = MemoryScoreStore::default();
        let entry = engine.record_score("Ada", &mut store).unwrap();
        assert_eq!(entry.name, "Ada");
        assert_eq!(entry.time_seconds, 42.37);

        let recorded = recorder.0.borrow();
        assert_eq!(recorded.game_over, vec![42.37], "game over notified exactly once");
        assert_eq!(recorded.matched, vec![0, 1]);
        assert_eq!(recorded.pairs_left, vec![1, 0]);
    }

    #[test]
    fn test_observer_sees_full_mismatch_cycle() {
        let recorder = SharedRecorder::default();
        let config = RoundConfig { pairs_count: 4, seed: Some(13), ..RoundConfig::default() };
        let mut engine =
            RoundEngine::new(config).unwrap().with_observer(Box::new(recorder.clone()));

        let (a, _) = indexes_of(&engine, 0);
        let (b, _) = indexes_of(&engine, 1);
        engine.reveal(a);
        engine.reveal(b);
        engine.tick(0.5);
        engine.tick(0.5);

        let recorded = recorder.0.borrow();
        assert_eq!(recorded.revealed, vec![a, b]);
        assert_eq!(recorded.mismatched, 1);
        let mut expected_hidden = vec![a, b];
        expected_hidden.sort_unstable();
        let mut hidden = recorded.hidden.clone();
        hidden.sort_unstable();
        assert_eq!(hidden, expected_hidden);
    }

    #[test]
    fn test_same_seed_same_board() {
        let layout = |seed: u64| -> Vec<CardId> {
            let config = RoundConfig { pairs_count: 8, seed: Some(seed), ..RoundConfig::default() };
            let engine = RoundEngine::new(config).unwrap();
            engine.cards().iter().map(Card::id).collect()
        };

        assert_eq!(layout(999), layout(999));
    }
}

//! Presentation hooks
//!
//! The engine announces state transitions through this capability trait so
//! any front-end (terminal, GUI, test recorder) can render them. Every hook
//! is a pure notification: the engine's correctness never depends on what an
//! observer does with it, and a hook that does nothing is always safe.

use crate::card::CardId;

pub trait RoundObserver {
    /// A card was turned face-up by the player.
    fn on_card_revealed(&mut self, _index: usize, _id: CardId) {}

    /// A mismatched card finished its revert and is face-down again.
    fn on_card_hidden(&mut self, _index: usize) {}

    /// Two cards resolved as a match and are now permanently face-up.
    fn on_pair_matched(&mut self, _first: usize, _second: usize, _id: CardId) {}

    /// Two cards resolved as a mismatch; they flip back after the delay.
    fn on_pair_mismatched(&mut self, _first: usize, _second: usize) {}

    /// The round clock advanced.
    fn on_timer_updated(&mut self, _elapsed: f32) {}

    /// The pairs-remaining counter changed.
    fn on_pairs_left(&mut self, _remaining: usize) {}

    /// The last pair was found; `final_time` is frozen at this instant.
    fn on_game_over(&mut self, _final_time: f32) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RoundObserver for NullObserver {}

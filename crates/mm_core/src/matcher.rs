//! Reveal queue and pair resolution
//!
//! Revealed cards accumulate here two at a time. The moment a pair is
//! assembled it is compared: a match commits both cards synchronously, a
//! mismatch arms a one-shot revert timer that flips both cards back down
//! once the configured delay has elapsed.
//!
//! Timers are plain counted-down state, so a `reset()` (round restart)
//! cancels them outright -- nothing can fire against a discarded card set.

use std::collections::VecDeque;

use crate::card::{Card, CardId};

/// Outcome of comparing an assembled pair. Indexes refer to the round's
/// card slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Matched { first: usize, second: usize, id: CardId },
    Mismatched { first: usize, second: usize },
}

/// One-shot countdown armed on a mismatch.
#[derive(Debug, Clone, Copy)]
struct RevertTimer {
    remaining: f32,
    cards: [usize; 2],
}

pub struct Matcher {
    delay: f32,
    pending: VecDeque<usize>,
    reverts: Vec<RevertTimer>,
}

impl Matcher {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            pending: VecDeque::with_capacity(2),
            reverts: Vec::new(),
        }
    }

    /// Number of revealed cards waiting for a partner (0 or 1 after any
    /// fully-processed reveal).
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Is at least one mismatch revert counting down?
    pub fn has_pending_revert(&self) -> bool {
        !self.reverts.is_empty()
    }

    /// Feed one successful reveal. Called exactly once per
    /// FaceDown -> FaceUp transition, in arrival order.
    ///
    /// Returns the resolution once the second card of a pair arrives; the
    /// first card of a pair returns `None` and stays queued.
    pub fn on_revealed(&mut self, index: usize, cards: &mut [Card]) -> Option<PairOutcome> {
        if self.pending.contains(&index) {
            // Input gating makes this unreachable from the engine.
            debug_assert!(false, "card {index} enqueued twice");
            log::warn!("ignoring duplicate enqueue of card {}", index);
            return None;
        }

        self.pending.push_back(index);
        log::debug!(
            "enqueued card {} (id {}), queue size {}",
            index,
            cards[index].id(),
            self.pending.len()
        );

        if self.pending.len() < 2 {
            return None;
        }

        // FIFO: the first-clicked card of the pair is compared positionally
        // first, though the comparison itself is symmetric.
        let first = self.pending.pop_front().unwrap_or(index);
        let second = self.pending.pop_front().unwrap_or(index);

        let id = cards[first].id();
        if id == cards[second].id() {
            log::debug!("cards {} and {} match (id {})", first, second, id);
            cards[first].confirm_match();
            cards[second].confirm_match();
            Some(PairOutcome::Matched { first, second, id })
        } else {
            log::debug!(
                "cards {} and {} do not match, flipping back in {:.2}s",
                first,
                second,
                self.delay
            );
            cards[first].confirm_mismatch();
            cards[second].confirm_mismatch();
            self.reverts.push(RevertTimer {
                remaining: self.delay,
                cards: [first, second],
            });
            Some(PairOutcome::Mismatched { first, second })
        }
    }

    /// Count down armed revert timers by `delta` seconds and complete any
    /// that expire, flipping their cards back face-down.
    ///
    /// Returns the pairs reverted this tick, in arming order.
    pub fn tick(&mut self, delta: f32, cards: &mut [Card]) -> Vec<[usize; 2]> {
        if self.reverts.is_empty() {
            return Vec::new();
        }

        let mut fired = Vec::new();
        self.reverts.retain_mut(|timer| {
            timer.remaining -= delta;
            if timer.remaining > 0.0 {
                return true;
            }
            fired.push(timer.cards);
            false
        });

        for pair in &fired {
            for &index in pair {
                cards[index].flip_down();
            }
            log::debug!("cards {} and {} flipped back and re-armed", pair[0], pair[1]);
        }

        fired
    }

    /// Drop the queue and cancel every armed timer without touching cards.
    /// Restart path: the card set is about to be discarded.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.reverts.clear();
    }
}

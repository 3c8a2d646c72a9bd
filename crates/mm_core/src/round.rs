//! Round lifecycle
//!
//! `RoundEngine` owns the card set, the reveal queue and the round clock.
//! It is the single authority for a round: deck construction at start,
//! reveal orchestration, win detection with the final time frozen at the
//! winning instant, and restart (which cancels any in-flight revert so
//! nothing stale can touch the new card set).
//!
//! Time only advances through `tick(delta)`; the engine never samples a
//! wall clock, so a round is a deterministic function of its seed and the
//! sequence of inputs and deltas.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::config::RoundConfig;
use crate::deck::DeckBuilder;
use crate::error::{GameError, Result};
use crate::matcher::{Matcher, PairOutcome};
use crate::observer::{NullObserver, RoundObserver};
use crate::score::{HighScoreEntry, ScoreStore};

/// Per-round counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Accepted reveals (gated clicks are not counted).
    pub reveals: u32,
    pub matches_found: u32,
    pub mismatches: u32,
}

/// Append-only history of what happened this round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    CardRevealed { index: usize, id: CardId },
    CardsMatched { first: usize, second: usize, id: CardId },
    CardsMismatched { first: usize, second: usize },
    CardsFlippedBack { first: usize, second: usize },
    RoundWon { final_time: f32 },
    RoundRestarted,
}

pub struct RoundEngine {
    config: RoundConfig,
    deck: DeckBuilder,
    cards: Vec<Card>,
    matcher: Matcher,
    pairs_remaining: usize,
    elapsed: f32,
    running: bool,
    final_time: Option<f32>,
    stats: RoundStats,
    events: Vec<RoundEvent>,
    observer: Box<dyn RoundObserver>,
}

impl RoundEngine {
    /// Validate the config, build the deck and deal the card set.
    /// An invalid config aborts construction; nothing is partially built.
    pub fn new(config: RoundConfig) -> Result<Self> {
        config.validate()?;

        let mut deck = match config.seed {
            Some(seed) => DeckBuilder::from_seed(seed),
            None => DeckBuilder::from_entropy(),
        };
        let cards: Vec<Card> = deck.build(config.pairs_count)?.into_iter().map(Card::new).collect();
        let matcher = Matcher::new(config.mismatch_delay);

        log::info!("round started: {} pairs, {} cards", config.pairs_count, cards.len());

        Ok(Self {
            pairs_remaining: config.pairs_count,
            matcher,
            cards,
            deck,
            config,
            elapsed: 0.0,
            running: true,
            final_time: None,
            stats: RoundStats::default(),
            events: Vec::new(),
            observer: Box::new(NullObserver),
        })
    }

    /// Attach a presentation adapter.
    pub fn with_observer(mut self, observer: Box<dyn RoundObserver>) -> Self {
        self.observer = observer;
        self
    }

    // ========================
    // Player input
    // ========================

    /// Player-initiated reveal of the card at `index`. Returns whether the
    /// reveal was accepted; a click on a gated card (already face-up,
    /// matched, or mid-revert) changes nothing.
    pub fn reveal(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            log::warn!("reveal ignored: card index {} out of range", index);
            return false;
        };
        if !card.reveal() {
            return false;
        }

        let id = self.cards[index].id();
        self.stats.reveals += 1;
        self.events.push(RoundEvent::CardRevealed { index, id });
        self.observer.on_card_revealed(index, id);

        if let Some(outcome) = self.matcher.on_revealed(index, &mut self.cards) {
            self.apply_outcome(outcome);
        }
        true
    }

    // ========================
    // Clock
    // ========================

    /// Advance the round by `delta` seconds. Drives both the revert timers
    /// and, while the round is running, the elapsed-time clock. Callable at
    /// arbitrary non-uniform intervals.
    pub fn tick(&mut self, delta: f32) {
        if !delta.is_finite() || delta < 0.0 {
            debug_assert!(false, "tick delta must be non-negative, got {delta}");
            return;
        }

        for pair in self.matcher.tick(delta, &mut self.cards) {
            self.events.push(RoundEvent::CardsFlippedBack { first: pair[0], second: pair[1] });
            self.observer.on_card_hidden(pair[0]);
            self.observer.on_card_hidden(pair[1]);
        }

        if self.running {
            self.elapsed += delta;
            self.observer.on_timer_updated(self.elapsed);
        }
    }

    // ========================
    // Lifecycle
    // ========================

    /// Discard the card set and start over with a fresh shuffle from the
    /// same configuration. Cancels the reveal queue and any pending revert,
    /// so no timer can fire against the discarded cards. Safe to call at
    /// any point, including mid-delay.
    pub fn restart(&mut self) -> Result<()> {
        self.matcher.reset();
        self.cards = self.deck.build(self.config.pairs_count)?.into_iter().map(Card::new).collect();
        self.pairs_remaining = self.config.pairs_count;
        self.elapsed = 0.0;
        self.running = true;
        self.final_time = None;
        self.stats = RoundStats::default();
        self.events.clear();
        self.events.push(RoundEvent::RoundRestarted);

        log::info!("round restarted with {} pairs", self.config.pairs_count);
        Ok(())
    }

    /// Persist the finished round as a high score. Only valid after game
    /// over; a store failure is reported upward and leaves the round intact.
    pub fn record_score(&self, name: &str, store: &mut dyn ScoreStore) -> Result<HighScoreEntry> {
        let Some(final_time) = self.final_time else {
            log::error!("record_score called before game over");
            return Err(GameError::IllegalState {
                reason: "record_score is only valid after game over".to_string(),
            });
        };

        let entry = HighScoreEntry::new(name, final_time);
        store.append(entry.clone())?;
        log::info!("saved high score: {} - {:.2}", entry.name, entry.time_seconds);
        Ok(entry)
    }

    // ========================
    // Accessors
    // ========================

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn pairs_remaining(&self) -> usize {
        self.pairs_remaining
    }

    /// Seconds accumulated through `tick` while the round was running.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The elapsed time frozen at the instant the last pair was found.
    pub fn final_time(&self) -> Option<f32> {
        self.final_time
    }

    /// Revealed cards currently waiting for a partner (0 or 1).
    pub fn pending_reveals(&self) -> usize {
        self.matcher.pending_len()
    }

    pub fn has_pending_revert(&self) -> bool {
        self.matcher.has_pending_revert()
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    // ========================
    // Internals
    // ========================

    fn apply_outcome(&mut self, outcome: PairOutcome) {
        match outcome {
            PairOutcome::Matched { first, second, id } => {
                self.stats.matches_found += 1;
                self.pairs_remaining -= 1;
                self.events.push(RoundEvent::CardsMatched { first, second, id });
                self.observer.on_pair_matched(first, second, id);
                self.observer.on_pairs_left(self.pairs_remaining);

                if self.pairs_remaining == 0 {
                    self.finish();
                }
            }
            PairOutcome::Mismatched { first, second } => {
                self.stats.mismatches += 1;
                self.events.push(RoundEvent::CardsMismatched { first, second });
                self.observer.on_pair_mismatched(first, second);
            }
        }
    }

    /// The clock stops here, exactly once per round.
    fn finish(&mut self) {
        self.running = false;
        self.final_time = Some(self.elapsed);
        self.events.push(RoundEvent::RoundWon { final_time: self.elapsed });
        log::info!("round won in {:.2}s", self.elapsed);
        self.observer.on_game_over(self.elapsed);
    }
}

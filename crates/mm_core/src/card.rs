//! Card state machine
//!
//! Each card owns its face state and input gate. The matcher drives the
//! resolution transitions (`confirm_match` / `confirm_mismatch` /
//! `flip_down`); the player only ever triggers `reveal`.

/// Identifier shared by exactly two cards in a round. Indexes into the
/// front-asset catalog.
pub type CardId = u32;

/// Face state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    /// Face-down, available for a reveal.
    FaceDown,
    /// Face-up, waiting for the matcher to resolve the pair.
    FaceUp,
    /// Face-up and matched. Terminal.
    Matched,
    /// Face-up after a mismatch, waiting out the flip-back delay.
    FlipPending,
}

impl CardState {
    /// Is the front visible in this state?
    pub fn is_face_up(&self) -> bool {
        !matches!(self, CardState::FaceDown)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, CardState::Matched)
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    state: CardState,
    input_enabled: bool,
}

impl Card {
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            state: CardState::FaceDown,
            input_enabled: true,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_face_up(&self) -> bool {
        self.state.is_face_up()
    }

    /// A reveal request is accepted only while face-down with input armed.
    pub fn accepts_input(&self) -> bool {
        self.input_enabled && self.state == CardState::FaceDown
    }

    /// Player-initiated reveal. Returns whether the transition happened;
    /// a gated request changes nothing -- racing clicks are normal input,
    /// not errors.
    pub fn reveal(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state = CardState::FaceUp;
        self.input_enabled = false;
        true
    }

    /// Resolve this card as part of a matched pair. Terminal: the card stays
    /// face-up and never accepts input again.
    pub(crate) fn confirm_match(&mut self) {
        debug_assert_eq!(self.state, CardState::FaceUp, "confirm_match outside FaceUp");
        if self.state == CardState::FaceUp {
            self.state = CardState::Matched;
        }
    }

    /// Resolve this card as part of a mismatched pair. It stays face-up
    /// until the revert timer flips it back down.
    pub(crate) fn confirm_mismatch(&mut self) {
        debug_assert_eq!(self.state, CardState::FaceUp, "confirm_mismatch outside FaceUp");
        if self.state == CardState::FaceUp {
            self.state = CardState::FlipPending;
        }
    }

    /// Complete a mismatch revert: back to face-down, input re-armed.
    pub(crate) fn flip_down(&mut self) {
        debug_assert_eq!(self.state, CardState::FlipPending, "flip_down outside FlipPending");
        if self.state == CardState::FlipPending {
            self.state = CardState::FaceDown;
            self.input_enabled = true;
        }
    }
}

//! Game state types.

use crate::card::Card;
use crate::trick::Play;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the cards to be dealt.
    WaitingForDeal,
    /// Seats are playing tricks.
    Playing,
    /// Every trick has been played and scores can be read.
    RoundOver,
}

/// What happened after a card was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// Winner of the trick, if this play completed it.
    pub trick_winner: Option<Play>,
    /// Whether this play finished the round.
    pub round_over: bool,
}

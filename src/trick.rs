//! Trick play and winner resolution.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::TrickError;
use crate::seat::{SEATS, Seat};

/// One card played by one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    /// The seat that played.
    pub seat: Seat,
    /// The card played.
    pub card: Card,
}

/// Progress of a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickState {
    /// No card played yet.
    Empty,
    /// Between one and three cards played.
    InProgress,
    /// All four cards played and the winner is known.
    Complete,
}

/// Picks the winning play.
///
/// If any trump was played the highest trump wins. Otherwise the highest card
/// of the leading suit wins; cards of any other suit never win. Returns
/// `None` only when no play follows the lead and none is trump, which cannot
/// happen once the leader has played.
#[must_use]
pub fn resolve(plays: &[Play], lead: Suit, trump: Option<Suit>) -> Option<Play> {
    let best_trump = plays
        .iter()
        .filter(|p| p.card.is_trump(trump))
        .max_by_key(|p| p.card.rank(trump));
    if best_trump.is_some() {
        return best_trump.copied();
    }

    plays
        .iter()
        .filter(|p| p.card.suit() == lead)
        .max_by_key(|p| p.card.rank(None))
        .copied()
}

/// A trick being filled one play at a time.
///
/// The first play fixes the leader and the leading suit. Later plays must
/// come from each following seat in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<Play>,
    trump: Option<Suit>,
    winner: Option<Play>,
}

impl Trick {
    /// Creates an empty trick under the round's trump suit.
    #[must_use]
    pub fn new(trump: Option<Suit>) -> Self {
        Self {
            plays: Vec::with_capacity(SEATS),
            trump,
            winner: None,
        }
    }

    /// Adds a play.
    ///
    /// Returns the winning play when this play completes the trick.
    ///
    /// # Errors
    ///
    /// Returns an error if the trick is complete, the seat is not next in
    /// turn (including a seat playing twice), or the card is already on the
    /// table.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<Option<Play>, TrickError> {
        if self.state() == TrickState::Complete {
            return Err(TrickError::AlreadyComplete);
        }
        if self.next_seat().is_some_and(|next| next != seat) {
            return Err(TrickError::OutOfTurn);
        }
        if self.plays.iter().any(|p| p.card == card) {
            return Err(TrickError::DuplicateCard);
        }

        self.plays.push(Play { seat, card });

        if self.plays.len() == SEATS {
            self.winner = self
                .lead()
                .and_then(|lead| resolve(&self.plays, lead, self.trump));
        }

        Ok(self.winner)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TrickState {
        match self.plays.len() {
            0 => TrickState::Empty,
            n if n < SEATS => TrickState::InProgress,
            _ => TrickState::Complete,
        }
    }

    /// Returns whether all four cards have been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == TrickState::Complete
    }

    /// Returns the plays in order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the trump suit, `None` for a no-trump contract.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the leading suit once the first card is down.
    #[must_use]
    pub fn lead(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit())
    }

    /// Returns the seat that led.
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        self.plays.first().map(|p| p.seat)
    }

    /// Returns the seat expected to play next.
    ///
    /// `None` before the lead, when any seat may start, and once complete.
    #[must_use]
    pub fn next_seat(&self) -> Option<Seat> {
        if self.is_complete() {
            return None;
        }
        self.leader().map(|leader| leader.next_n(self.plays.len()))
    }

    /// Returns the winning play of a complete trick.
    #[must_use]
    pub const fn winner(&self) -> Option<Play> {
        self.winner
    }

    /// Returns the play currently taking the trick.
    #[must_use]
    pub fn current_winner(&self) -> Option<Play> {
        self.lead()
            .and_then(|lead| resolve(&self.plays, lead, self.trump))
    }

    /// Sum of card points on the table.
    #[must_use]
    pub fn points(&self) -> u16 {
        self.plays.iter().map(|p| p.card.points(self.trump)).sum()
    }
}

use alloc::vec::Vec;

use tracing::info;

use crate::card::{Card, DECK_SIZE};
use crate::deck::HAND_SIZE;
use crate::error::DealError;
use crate::hand::Hand;
use crate::seat::SEATS;
use crate::trick::Trick;

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck and deals eight cards to every seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck cannot
    /// supply a full deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        self.deck.shuffle(&mut self.rng);
        let hands = self.deck.deal_hands(self.options.first_leader)?;
        self.start_round(hands);

        Ok(())
    }

    /// Starts a round from hands dealt elsewhere.
    ///
    /// Hands are indexed by [`crate::Seat::index`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, or the hands are
    /// not four hands of eight cards with no card repeated.
    pub fn deal_with(&mut self, hands: [Hand; SEATS]) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }
        if hands.iter().any(|h| h.len() != HAND_SIZE) {
            return Err(DealError::InvalidHands);
        }

        let mut seen: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        for card in hands.iter().flat_map(|h| h.cards().iter().copied()) {
            if seen.contains(&card) {
                return Err(DealError::InvalidHands);
            }
            seen.push(card);
        }

        self.start_round(hands);
        Ok(())
    }

    fn start_round(&mut self, hands: [Hand; SEATS]) {
        self.hands = hands;
        self.trick = Trick::new(self.options.trump);
        self.round = Self::new_round(&self.options);
        self.turn = self.options.first_leader;
        self.state = GameState::Playing;

        info!(
            trump = ?self.options.trump,
            leader = %self.turn,
            "hands dealt"
        );
    }
}

use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use tracing::debug;

use crate::card::Card;
use crate::error::{HandError, PlayError};
use crate::seat::Seat;
use crate::trick::Trick;

use super::{Game, GameState, PlayOutcome};

impl Game {
    fn ensure_turn(&self, seat: Seat) -> Result<(), PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        if self.turn != seat {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    /// Cards the seat may play right now.
    ///
    /// With follow-suit enforced this is the seat's leading-suit cards when it
    /// holds any; otherwise it is the whole hand.
    #[must_use]
    pub fn legal_moves(&self, seat: Seat) -> Vec<Card> {
        let hand = self.hand(seat);
        if self.options.follow_suit {
            hand.legal_moves(self.trick.lead())
        } else {
            hand.cards().to_vec()
        }
    }

    /// Plays a card from the seat's hand into the current trick.
    ///
    /// When the card completes the trick, the trick is recorded and its
    /// winner leads the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, it is not the seat's
    /// turn, the seat does not hold the card, or the card does not follow
    /// suit while follow-suit is enforced.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        self.ensure_turn(seat)?;

        if !self.hand(seat).contains(card) {
            return Err(HandError::CardNotInHand.into());
        }
        if !self.legal_moves(seat).contains(&card) {
            return Err(PlayError::MustFollowSuit);
        }

        let trick_winner = self.trick.play(seat, card)?;
        self.hands[seat.index()].remove(card)?;
        debug!(seat = %seat, card = %card, "card played");

        let Some(winner) = trick_winner else {
            self.turn = seat.next();
            return Ok(PlayOutcome {
                card,
                trick_winner: None,
                round_over: false,
            });
        };

        self.round.record_trick(&self.trick)?;
        self.trick = Trick::new(self.options.trump);
        self.turn = winner.seat;

        let round_over = self.round.is_round_complete();
        if round_over {
            self.state = GameState::RoundOver;
        }

        Ok(PlayOutcome {
            card,
            trick_winner: Some(winner),
            round_over,
        })
    }

    /// Plays the card at a 1-based position in the seat's hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] for a position outside the
    /// hand, or any error of [`Game::play`].
    pub fn play_by_index(&mut self, seat: Seat, index: usize) -> Result<PlayOutcome, PlayError> {
        self.ensure_turn(seat)?;
        let card = self.hand(seat).get_by_index(index)?;
        self.play(seat, card)
    }

    /// Plays a uniformly random legal card for the seat.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played or it is not the seat's
    /// turn.
    pub fn auto_play(&mut self, seat: Seat) -> Result<PlayOutcome, PlayError> {
        self.ensure_turn(seat)?;
        let moves = self.legal_moves(seat);
        let card = *moves.choose(&mut self.rng).ok_or(PlayError::InvalidState)?;
        self.play(seat, card)
    }
}

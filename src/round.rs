//! Round tracking and scoring.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, info};

use crate::card::{Card, Face, Suit};
use crate::deck::HAND_SIZE;
use crate::error::RoundError;
use crate::result::{RoundResult, TeamScore};
use crate::seat::{SEATS, Seat, Team};
use crate::trick::{Play, Trick};

/// Tricks in a full round.
pub const TRICKS_PER_ROUND: usize = HAND_SIZE;

/// Default bonus for taking the last trick.
pub const LAST_TRICK_BONUS: u16 = 10;

/// Bonus for King and Queen of trump played by one seat.
pub const BALOOT_BONUS: u16 = 20;

/// A trick that has been recorded into a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedTrick {
    /// Plays in the order they were made.
    pub plays: Vec<Play>,
    /// The winning play.
    pub winner: Play,
    /// Card points in the trick.
    pub points: u16,
}

/// Accumulates completed tricks and computes the round score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    trump: Option<Suit>,
    tricks: Vec<CompletedTrick>,
    tricks_won: [u8; SEATS],
    last_trick_bonus: u16,
    baloot_bonus: bool,
}

impl Round {
    /// Creates an empty round under the given trump suit.
    #[must_use]
    pub fn new(trump: Option<Suit>) -> Self {
        Self {
            trump,
            tricks: Vec::with_capacity(TRICKS_PER_ROUND),
            tricks_won: [0; SEATS],
            last_trick_bonus: LAST_TRICK_BONUS,
            baloot_bonus: true,
        }
    }

    /// Sets the bonus for taking the last trick.
    #[must_use]
    pub const fn with_last_trick_bonus(mut self, bonus: u16) -> Self {
        self.last_trick_bonus = bonus;
        self
    }

    /// Sets whether King and Queen of trump by one seat score a bonus.
    #[must_use]
    pub const fn with_baloot_bonus(mut self, enabled: bool) -> Self {
        self.baloot_bonus = enabled;
        self
    }

    /// Records a complete trick and credits its winner.
    ///
    /// Returns the winning play.
    ///
    /// # Errors
    ///
    /// Returns an error if the round already has all its tricks, the trick is
    /// not complete, it was played under a different trump suit, or one of
    /// its cards was already recorded.
    pub fn record_trick(&mut self, trick: &Trick) -> Result<Play, RoundError> {
        if self.is_round_complete() {
            return Err(RoundError::AlreadyComplete);
        }
        if trick.trump() != self.trump {
            return Err(RoundError::TrumpMismatch);
        }
        let winner = trick.winner().ok_or(RoundError::TrickIncomplete)?;
        if trick.plays().iter().any(|p| self.is_recorded(p.card)) {
            return Err(RoundError::CardAlreadyRecorded);
        }
        let points = trick.points();

        self.tricks_won[winner.seat.index()] += 1;
        self.tricks.push(CompletedTrick {
            plays: trick.plays().to_vec(),
            winner,
            points,
        });

        debug!(
            trick = self.tricks.len(),
            winner = %winner.seat,
            card = %winner.card,
            points,
            "trick recorded"
        );
        if self.is_round_complete() {
            info!(trump = ?self.trump, "round complete");
        }

        Ok(winner)
    }

    /// Returns whether the card was played in a recorded trick.
    #[must_use]
    pub fn is_recorded(&self, card: Card) -> bool {
        self.tricks
            .iter()
            .flat_map(|t| t.plays.iter())
            .any(|p| p.card == card)
    }

    /// Returns whether every trick of the round has been recorded.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.tricks.len() >= TRICKS_PER_ROUND
    }

    /// Returns the round's trump suit.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the recorded tricks in order.
    #[must_use]
    pub fn tricks(&self) -> &[CompletedTrick] {
        &self.tricks
    }

    /// Returns the number of tricks a seat has taken so far.
    #[must_use]
    pub const fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won[seat.index()]
    }

    /// Returns the card points a team has taken so far.
    #[must_use]
    pub fn card_points(&self, team: Team) -> u16 {
        self.tricks
            .iter()
            .filter(|t| t.winner.seat.team() == team)
            .map(|t| t.points)
            .sum()
    }

    /// Returns the seat that played both King and Queen of trump.
    #[must_use]
    pub fn baloot_holder(&self) -> Option<Seat> {
        let trump = self.trump?;
        let played_by = |card: Card| {
            self.tricks
                .iter()
                .flat_map(|t| t.plays.iter())
                .find(|p| p.card == card)
                .map(|p| p.seat)
        };
        let king = played_by(Card::new(Face::King, trump))?;
        let queen = played_by(Card::new(Face::Queen, trump))?;
        (king == queen).then_some(king)
    }

    /// Computes the final scores.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Incomplete`] before all tricks are recorded.
    pub fn final_scores(&self) -> Result<RoundResult, RoundError> {
        if !self.is_round_complete() {
            return Err(RoundError::Incomplete);
        }

        let tricks: HashMap<Seat, u8> = Seat::ALL
            .into_iter()
            .map(|seat| (seat, self.tricks_won(seat)))
            .collect();

        let last_team = self.tricks.last().map(|t| t.winner.seat.team());
        let baloot_team = self
            .baloot_holder()
            .filter(|_| self.baloot_bonus)
            .map(Seat::team);

        let teams: HashMap<Team, TeamScore> = Team::ALL
            .into_iter()
            .map(|team| {
                let score = TeamScore {
                    tricks: Seat::ALL
                        .into_iter()
                        .filter(|s| s.team() == team)
                        .map(|s| self.tricks_won(s))
                        .sum(),
                    card_points: self.card_points(team),
                    last_trick_bonus: if last_team == Some(team) {
                        self.last_trick_bonus
                    } else {
                        0
                    },
                    baloot_bonus: if baloot_team == Some(team) {
                        BALOOT_BONUS
                    } else {
                        0
                    },
                };
                (team, score)
            })
            .collect();

        let sweep = Team::ALL
            .into_iter()
            .find(|team| teams.get(team).is_some_and(|s| usize::from(s.tricks) == TRICKS_PER_ROUND));

        Ok(RoundResult {
            trump: self.trump,
            tricks,
            teams,
            sweep,
        })
    }
}

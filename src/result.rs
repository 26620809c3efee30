//! Round result types.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Suit;
use crate::seat::{Seat, Team};

/// Points earned by one team over a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamScore {
    /// Tricks taken by both partners.
    pub tricks: u8,
    /// Card points (abnat) from the tricks taken.
    pub card_points: u16,
    /// Bonus for taking the last trick.
    pub last_trick_bonus: u16,
    /// Bonus for holding King and Queen of trump.
    pub baloot_bonus: u16,
}

impl TeamScore {
    /// Card points plus every bonus.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.card_points + self.last_trick_bonus + self.baloot_bonus
    }
}

/// Final tally of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Trump suit the round was played under.
    pub trump: Option<Suit>,
    /// Tricks taken by each seat.
    pub tricks: HashMap<Seat, u8>,
    /// Score of each team.
    pub teams: HashMap<Team, TeamScore>,
    /// Team that took every trick (kaboot), if any.
    pub sweep: Option<Team>,
}

impl RoundResult {
    /// Tricks taken by a seat.
    #[must_use]
    pub fn tricks_for(&self, seat: Seat) -> u8 {
        self.tricks.get(&seat).copied().unwrap_or(0)
    }

    /// Score of a team.
    #[must_use]
    pub fn score(&self, team: Team) -> TeamScore {
        self.teams.get(&team).copied().unwrap_or_default()
    }

    /// Total points of a team.
    #[must_use]
    pub fn total(&self, team: Team) -> u16 {
        self.score(team).total()
    }

    /// Team with the higher total, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Team> {
        let ns = self.total(Team::NorthSouth);
        let ew = self.total(Team::EastWest);
        match ns.cmp(&ew) {
            core::cmp::Ordering::Greater => Some(Team::NorthSouth),
            core::cmp::Ordering::Less => Some(Team::EastWest),
            core::cmp::Ordering::Equal => None,
        }
    }
}

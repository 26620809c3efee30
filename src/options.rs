//! Game configuration options.

use crate::card::Suit;
use crate::round::LAST_TRICK_BONUS;
use crate::seat::Seat;

/// Configuration options for a Baloot game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use baloot::{GameOptions, Seat, Suit};
///
/// let options = GameOptions::default()
///     .with_trump(Some(Suit::Spades))
///     .with_first_leader(Seat::East)
///     .with_follow_suit(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Trump suit for the round. `None` plays without trump.
    pub trump: Option<Suit>,
    /// Seat that receives the first card and leads the first trick.
    pub first_leader: Seat,
    /// Whether seats holding the leading suit must follow it.
    pub follow_suit: bool,
    /// Points for taking the last trick.
    pub last_trick_bonus: u16,
    /// Whether King and Queen of trump by one seat score a bonus.
    pub baloot_bonus: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            trump: None,
            first_leader: Seat::North,
            follow_suit: false,
            last_trick_bonus: LAST_TRICK_BONUS,
            baloot_bonus: true,
        }
    }
}

impl GameOptions {
    /// Sets the trump suit.
    ///
    /// # Example
    ///
    /// ```
    /// use baloot::{GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_trump(Some(Suit::Hearts));
    /// assert_eq!(options.trump, Some(Suit::Hearts));
    /// ```
    #[must_use]
    pub const fn with_trump(mut self, trump: Option<Suit>) -> Self {
        self.trump = trump;
        self
    }

    /// Sets the seat that leads the first trick.
    ///
    /// # Example
    ///
    /// ```
    /// use baloot::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first_leader(Seat::West);
    /// assert_eq!(options.first_leader, Seat::West);
    /// ```
    #[must_use]
    pub const fn with_first_leader(mut self, seat: Seat) -> Self {
        self.first_leader = seat;
        self
    }

    /// Sets whether seats must follow the leading suit.
    #[must_use]
    pub const fn with_follow_suit(mut self, enforced: bool) -> Self {
        self.follow_suit = enforced;
        self
    }

    /// Sets the bonus for the last trick.
    ///
    /// # Example
    ///
    /// ```
    /// use baloot::GameOptions;
    ///
    /// let options = GameOptions::default().with_last_trick_bonus(0);
    /// assert_eq!(options.last_trick_bonus, 0);
    /// ```
    #[must_use]
    pub const fn with_last_trick_bonus(mut self, bonus: u16) -> Self {
        self.last_trick_bonus = bonus;
        self
    }

    /// Sets whether the Baloot bonus is scored.
    #[must_use]
    pub const fn with_baloot_bonus(mut self, enabled: bool) -> Self {
        self.baloot_bonus = enabled;
        self
    }
}

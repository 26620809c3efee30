//! Game driver and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::Round;
use crate::seat::{SEATS, Seat};
use crate::trick::Trick;

mod deal;
mod play;
pub mod state;

pub use state::{GameState, PlayOutcome};

/// A Baloot game driver that owns the deck, hands, and round flow.
///
/// The game deals, enforces table turn order, feeds each play into the
/// current [`Trick`], and records completed tricks into the [`Round`]. Use
/// [`GameOptions`] to choose the trump suit, the opening leader, and the
/// scoring bonuses.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The deck, reshuffled on every deal.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Hands indexed by seat.
    hands: [Hand; SEATS],
    /// Trick being played.
    trick: Trick,
    /// Tricks recorded so far.
    round: Round,
    /// Seat whose turn it is.
    turn: Seat,
    /// Random number generator for shuffling and auto-play.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use baloot::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let round = Self::new_round(&options);
        Self {
            deck: Deck::new(),
            state: GameState::WaitingForDeal,
            hands: Default::default(),
            trick: Trick::new(options.trump),
            round,
            turn: options.first_leader,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        }
    }

    fn new_round(options: &GameOptions) -> Round {
        Round::new(options.trump)
            .with_last_trick_bonus(options.last_trick_bonus)
            .with_baloot_bonus(options.baloot_bonus)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside of trick play.
    #[must_use]
    pub fn current_player(&self) -> Option<Seat> {
        (self.state == GameState::Playing).then_some(self.turn)
    }

    /// Returns a seat's hand.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Returns the trick being played.
    #[must_use]
    pub const fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Returns the round tracker.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the number of undealt cards in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    /// Returns the final scores of the round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Incomplete`] until every trick has been played.
    pub fn final_scores(&self) -> Result<RoundResult, RoundError> {
        self.round.final_scores()
    }

    /// Clears hands, trick, and round (called at the end of a round).
    ///
    /// This returns the game to the `WaitingForDeal` state.
    pub fn clear_round(&mut self) {
        for hand in &mut self.hands {
            hand.clear();
        }
        self.trick = Trick::new(self.options.trump);
        self.round = Self::new_round(&self.options);
        self.turn = self.options.first_leader;
        self.state = GameState::WaitingForDeal;
    }
}

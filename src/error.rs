//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when building a card from outside input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Face is not one of 7, 8, 9, 10, Jack, Queen, King, Ace.
    #[error("invalid card face")]
    InvalidFace,
    /// Suit is not one of Hearts, Diamonds, Clubs, Spades.
    #[error("invalid card suit")]
    InvalidSuit,
    /// Text is not of the form `<face> of <suit>`.
    #[error("malformed card text")]
    Malformed,
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    Exhausted,
}

/// Errors that can occur while filling a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// Seat already played in this trick, or is not next in turn order.
    #[error("played out of turn")]
    OutOfTurn,
    /// All four cards have already been played.
    #[error("trick is already complete")]
    AlreadyComplete,
    /// Card is already on the table in this trick.
    #[error("card already played in this trick")]
    DuplicateCard,
}

/// Errors that can occur when taking a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold the card.
    #[error("card not in hand")]
    CardNotInHand,
    /// Choice is outside `1..=hand size`.
    #[error("choice {index} is out of range 1..={len}")]
    IndexOutOfRange {
        /// The rejected choice.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// Choice is not a number.
    #[error("choice is not a number")]
    InputParse,
}

/// Errors that can occur while tracking a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Scores requested before all tricks were recorded.
    #[error("round is not complete")]
    Incomplete,
    /// All tricks of the round have already been recorded.
    #[error("round is already complete")]
    AlreadyComplete,
    /// Recorded trick does not have four cards.
    #[error("trick is not complete")]
    TrickIncomplete,
    /// Recorded trick was played under a different trump suit.
    #[error("trick trump does not match round trump")]
    TrumpMismatch,
    /// A card of the trick was already recorded in an earlier trick.
    #[error("card already recorded in this round")]
    CardAlreadyRecorded,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Preset hands are not four full hands of distinct cards.
    #[error("hands must hold eight distinct cards each")]
    InvalidHands,
    /// Deck could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when a seat plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Seat holds the leading suit and must follow it.
    #[error("must follow the leading suit")]
    MustFollowSuit,
    /// Hand rejected the card or choice.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// Trick rejected the play.
    #[error(transparent)]
    Trick(#[from] TrickError),
    /// Round tracker rejected the completed trick.
    #[error(transparent)]
    Round(#[from] RoundError),
}

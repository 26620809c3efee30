//! A Baloot trick-taking card game engine with optional `no_std` support.
//!
//! The crate provides the card model, a 32-card [`Deck`], the [`Trick`]
//! resolution rules with and without trump, a [`Round`] score tracker, and a
//! [`Game`] driver that ties them together for four seats.
//!
//! # Example
//!
//! ```
//! use baloot::{Game, GameOptions, GameState, Seat, Suit};
//!
//! let options = GameOptions::default().with_trump(Some(Suit::Spades));
//! let mut game = Game::new(options, 42);
//! game.deal().unwrap();
//!
//! while let Some(seat) = game.current_player() {
//!     game.auto_play(seat).unwrap();
//! }
//!
//! assert_eq!(game.state(), GameState::RoundOver);
//! let result = game.final_scores().unwrap();
//! let tricks: u8 = Seat::ALL.iter().map(|&s| result.tricks_for(s)).sum();
//! assert_eq!(tricks, 8);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod seat;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::{Deck, HAND_SIZE};
pub use error::{CardError, DealError, DeckError, HandError, PlayError, RoundError, TrickError};
pub use game::{Game, GameState, PlayOutcome};
pub use hand::{Hand, parse_choice};
pub use options::GameOptions;
pub use result::{RoundResult, TeamScore};
pub use round::{CompletedTrick, Round, TRICKS_PER_ROUND};
pub use seat::{Seat, Team};
pub use trick::{Play, Trick, TrickState, resolve};

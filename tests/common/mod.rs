//! Shared helpers for integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::sync::OnceLock;

use baloot::{Card, Face, Hand, Suit};
use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize test logging once per binary.
///
/// The level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(face: Face, suit: Suit) -> Card {
    Card::new(face, suit)
}

pub fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

/// Every seat holds one full suit: North hearts, East diamonds, South clubs,
/// West spades.
pub fn suit_per_seat() -> [Hand; 4] {
    Suit::ALL.map(|suit| hand_of(&Face::ALL.map(|face| card(face, suit))))
}

//! The 32-card Baloot deck.

use alloc::string::ToString;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::DeckError;
use crate::hand::Hand;
use crate::seat::{SEATS, Seat};

/// Cards each seat receives in the first dealing pass.
pub const FIRST_PASS: usize = 5;
/// Cards each seat receives in the second dealing pass.
pub const SECOND_PASS: usize = 3;
/// Cards in a full hand.
pub const HAND_SIZE: usize = FIRST_PASS + SECOND_PASS;

/// An ordered deck with a deal cursor.
///
/// Dealing never removes cards; it only moves the cursor forward. A shuffle
/// reorders the cards and rewinds the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
}

impl Deck {
    /// Creates a deck in canonical order: faces outer, suits inner.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::new(Face::Seven, Suit::Hearts); DECK_SIZE];
        let canonical = Face::ALL
            .into_iter()
            .flat_map(|face| Suit::ALL.into_iter().map(move |suit| Card::new(face, suit)));
        for (slot, card) in cards.iter_mut().zip(canonical) {
            *slot = card;
        }

        Self { cards, cursor: 0 }
    }

    /// Shuffles every card back into the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 32 cards have been dealt.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining_count(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns the full card order, dealt cards included.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals four hands of eight: five cards each, then three cards each,
    /// going around the table from `first`.
    ///
    /// Hands are indexed by [`Seat::index`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than 32 cards remain. The
    /// cursor is not moved in that case.
    pub fn deal_hands(&mut self, first: Seat) -> Result<[Hand; SEATS], DeckError> {
        if self.remaining_count() < SEATS * HAND_SIZE {
            return Err(DeckError::Exhausted);
        }

        let mut hands: [Hand; SEATS] = Default::default();
        for pass in [FIRST_PASS, SECOND_PASS] {
            for seat in first.rotation() {
                for _ in 0..pass {
                    hands[seat.index()].add_card(self.deal_one()?);
                }
            }
        }

        Ok(hands)
    }
}

impl fmt::Display for Deck {
    /// Lists the whole deck, dealt cards included, four to a row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cards.chunks(Suit::ALL.len()) {
            for card in row {
                write!(f, "{:<19}", card.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

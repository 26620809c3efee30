//! A seat's hand and the human choice boundary.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::HandError;

/// Parses a human choice into a validated 1-based index.
///
/// # Errors
///
/// Returns [`HandError::InputParse`] for non-numeric input and
/// [`HandError::IndexOutOfRange`] for a number outside `1..=hand_size`.
///
/// # Example
///
/// ```
/// use baloot::hand::parse_choice;
///
/// assert_eq!(parse_choice(" 3\n", 8), Ok(3));
/// assert!(parse_choice("nine", 8).is_err());
/// ```
pub fn parse_choice(input: &str, hand_size: usize) -> Result<usize, HandError> {
    let index = input
        .trim()
        .parse::<usize>()
        .map_err(|_| HandError::InputParse)?;
    check_index(index, hand_size)?;
    Ok(index)
}

const fn check_index(index: usize, len: usize) -> Result<(), HandError> {
    if index == 0 || index > len {
        return Err(HandError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Cards held by one seat, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the hand holds any card of the suit.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == suit)
    }

    /// Returns the card at a 1-based position without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] outside `1..=len`.
    pub fn get_by_index(&self, index: usize) -> Result<Card, HandError> {
        check_index(index, self.cards.len())?;
        Ok(self.cards[index - 1])
    }

    /// Removes the card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if the hand does not hold it.
    pub fn remove(&mut self, card: Card) -> Result<Card, HandError> {
        let position = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(HandError::CardNotInHand)?;
        Ok(self.cards.remove(position))
    }

    /// Removes the card at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] outside `1..=len`.
    pub fn play_by_index(&mut self, index: usize) -> Result<Card, HandError> {
        check_index(index, self.cards.len())?;
        Ok(self.cards.remove(index - 1))
    }

    /// Cards that may be played to a trick led with `lead`.
    ///
    /// A seat holding the leading suit must follow it; otherwise any card is
    /// allowed. With no lead yet, every card is allowed.
    #[must_use]
    pub fn legal_moves(&self, lead: Option<Suit>) -> Vec<Card> {
        match lead {
            Some(suit) if self.has_suit(suit) => self
                .cards
                .iter()
                .copied()
                .filter(|c| c.suit() == suit)
                .collect(),
            _ => self.cards.clone(),
        }
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

//! Card types, rank tables and point tables.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardError::InvalidSuit)
    }
}

/// Card face. Only the 32-card Baloot faces exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the face name as printed on a card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s))
            .ok_or(CardError::InvalidFace)
    }
}

impl TryFrom<u8> for Face {
    type Error = CardError;

    /// Converts a pip value (7-10) or a court value (11 = Jack, 12 = Queen,
    /// 13 = King, 1 or 14 = Ace).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            1 | 14 => Ok(Self::Ace),
            _ => Err(CardError::InvalidFace),
        }
    }
}

// Indexed by `Face as usize`.
const PLAIN_RANK: [u8; 8] = [0, 1, 2, 6, 3, 4, 5, 7];
const TRUMP_RANK: [u8; 8] = [0, 1, 6, 4, 7, 2, 3, 5];
const PLAIN_POINTS: [u16; 8] = [0, 0, 0, 10, 2, 3, 4, 11];
const TRUMP_POINTS: [u16; 8] = [0, 0, 14, 10, 20, 3, 4, 11];

/// Rank of a face within its suit. Higher wins.
///
/// Non-trump order is 7 < 8 < 9 < J < Q < K < 10 < A. Trump order is
/// 7 < 8 < Q < K < 10 < A < 9 < J.
#[must_use]
pub const fn rank(face: Face, is_trump: bool) -> u8 {
    if is_trump {
        TRUMP_RANK[face.index()]
    } else {
        PLAIN_RANK[face.index()]
    }
}

/// Point value of a face.
#[must_use]
pub const fn points(face: Face, is_trump: bool) -> u16 {
    if is_trump {
        TRUMP_POINTS[face.index()]
    } else {
        PLAIN_POINTS[face.index()]
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Creates a card from textual face and suit names, e.g. `("Jack", "Spades")`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or suit is not one of the Baloot values.
    pub fn parse(face: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(face.parse()?, suit.parse()?))
    }

    /// Returns the face of the card.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card belongs to the trump suit.
    #[must_use]
    pub fn is_trump(&self, trump: Option<Suit>) -> bool {
        trump == Some(self.suit)
    }

    /// Rank of the card under the given trump suit.
    #[must_use]
    pub fn rank(&self, trump: Option<Suit>) -> u8 {
        rank(self.face, self.is_trump(trump))
    }

    /// Point value of the card under the given trump suit.
    #[must_use]
    pub fn points(&self, trump: Option<Suit>) -> u16 {
        points(self.face, self.is_trump(trump))
    }

    /// Asset file name for renderers, e.g. `Jack_of_Spades.png`.
    #[must_use]
    pub fn image_name(&self) -> String {
        alloc::format!("{}_of_{}.png", self.face, self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, suit) = s.split_once(" of ").ok_or(CardError::Malformed)?;
        Self::parse(face, suit)
    }
}

/// Number of cards in a Baloot deck.
pub const DECK_SIZE: usize = 32;

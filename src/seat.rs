//! Table positions and partnerships.

use core::fmt;

/// Number of seats at a Baloot table.
pub const SEATS: usize = 4;

/// A seat at the table. Play proceeds North, East, South, West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Seat {
    /// All seats in turn order.
    pub const ALL: [Self; SEATS] = [Self::North, Self::East, Self::South, Self::West];

    /// Index of the seat in turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Seat at the given turn-order index, wrapping around the table.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SEATS]
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        self.next_n(1)
    }

    /// The seat `n` places after this one.
    #[must_use]
    pub const fn next_n(self, n: usize) -> Self {
        Self::from_index(self.index() + n)
    }

    /// The seats in play order, starting with this one.
    pub fn rotation(self) -> impl Iterator<Item = Self> {
        (0..SEATS).map(move |n| self.next_n(n))
    }

    /// Partnership this seat belongs to.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Self::North | Self::South => Team::NorthSouth,
            Self::East | Self::West => Team::EastWest,
        }
    }

    /// The seat across the table.
    #[must_use]
    pub const fn partner(self) -> Self {
        self.next_n(2)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// A partnership of two opposite seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    /// North and South.
    NorthSouth,
    /// East and West.
    EastWest,
}

impl Team {
    /// Both teams.
    pub const ALL: [Self; 2] = [Self::NorthSouth, Self::EastWest];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::NorthSouth => Self::EastWest,
            Self::EastWest => Self::NorthSouth,
        }
    }
}

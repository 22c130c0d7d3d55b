//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
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
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Points the rank is worth before any soft-ace adjustment.
    ///
    /// Aces count 11, face cards count 10.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Points the card is worth (Ace = 11).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.rank.point_value()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values() {
        assert_eq!(Rank::Ace.point_value(), 11);
        assert_eq!(Rank::Seven.point_value(), 7);
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.point_value(), 10);
        }
    }

    #[test]
    fn rank_index_matches_all() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
    }

    #[test]
    fn display_names_card() {
        let card = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(alloc::format!("{card}"), "Queen of Hearts");
    }
}

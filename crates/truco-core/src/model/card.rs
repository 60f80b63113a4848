use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Highest relative value a non-manilha can reach (a Three).
const NON_MANILHA_CEILING: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank that becomes trump when `self` is turned up as the vira.
    pub const fn manilha_rank(self) -> Rank {
        self.rank.next()
    }

    pub fn is_manilha(self, vira: Card) -> bool {
        self.rank == vira.manilha_rank()
    }

    /// The Clubs manilha, strongest card of the hand.
    pub fn is_zap(self, vira: Card) -> bool {
        self.is_manilha(vira) && self.suit == Suit::Clubs
    }

    pub fn is_copas(self, vira: Card) -> bool {
        self.is_manilha(vira) && self.suit == Suit::Hearts
    }

    pub fn is_espadilha(self, vira: Card) -> bool {
        self.is_manilha(vira) && self.suit == Suit::Spades
    }

    pub fn is_ouros(self, vira: Card) -> bool {
        self.is_manilha(vira) && self.suit == Suit::Diamonds
    }

    /// Scalar strength of the card under `vira`.
    ///
    /// Non-manilhas map to their rank position (`0..=9`) so equal ranks draw.
    /// Manilhas sit above every other card at `10..=13`, split by suit.
    pub fn relative_value(self, vira: Card) -> u8 {
        if self.is_manilha(vira) {
            NON_MANILHA_CEILING + 1 + self.suit as u8
        } else {
            self.rank.value()
        }
    }

    pub fn compare(self, other: Card, vira: Card) -> Ordering {
        self.relative_value(vira).cmp(&other.relative_value(vira))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParseError {
    input: String,
}

impl CardParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for CardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid card '{}': expected a rank from 4567QJKA23 followed by a suit from DSHC",
            self.input
        )
    }
}

impl std::error::Error for CardParseError {}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || CardParseError {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let rank = chars.next().and_then(Rank::from_symbol).ok_or_else(error)?;
        let suit = chars.next().and_then(Suit::from_symbol).ok_or_else(error)?;
        if chars.next().is_some() {
            return Err(error());
        }
        Ok(Card::new(rank, suit))
    }
}

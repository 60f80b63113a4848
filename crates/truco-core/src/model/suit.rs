use core::fmt;
use serde::{Deserialize, Serialize};

/// Suits ordered by manilha strength: Diamonds is the weakest trump, Clubs the zap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 0,
    Spades = 1,
    Hearts = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Diamonds),
            1 => Some(Suit::Spades),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_symbols() {
        assert_eq!(Suit::Clubs.to_string(), "C");
        assert_eq!(Suit::Hearts.to_string(), "H");
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Suit::from_index(1), Some(Suit::Spades));
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn manilha_order_is_diamonds_spades_hearts_clubs() {
        assert!(Suit::Diamonds < Suit::Spades);
        assert!(Suit::Spades < Suit::Hearts);
        assert!(Suit::Hearts < Suit::Clubs);
    }

    #[test]
    fn from_symbol_is_case_insensitive() {
        assert_eq!(Suit::from_symbol('c'), Some(Suit::Clubs));
        assert_eq!(Suit::from_symbol('x'), None);
    }
}

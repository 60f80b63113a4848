use core::fmt;
use serde::{Deserialize, Serialize};

/// Truco ranks in ascending strength; eights, nines and tens are not dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Four = 0,
    Five = 1,
    Six = 2,
    Seven = 3,
    Queen = 4,
    Jack = 5,
    King = 6,
    Ace = 7,
    Two = 8,
    Three = 9,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Rank::Four),
            1 => Some(Rank::Five),
            2 => Some(Rank::Six),
            3 => Some(Rank::Seven),
            4 => Some(Rank::Queen),
            5 => Some(Rank::Jack),
            6 => Some(Rank::King),
            7 => Some(Rank::Ace),
            8 => Some(Rank::Two),
            9 => Some(Rank::Three),
            _ => None,
        }
    }

    /// Position in the strength ladder, `0` for Four up to `9` for Three.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The rank one step up the ladder, wrapping Three back to Four.
    ///
    /// This is the manilha rank when `self` is the vira's rank.
    pub const fn next(self) -> Self {
        match self {
            Rank::Four => Rank::Five,
            Rank::Five => Rank::Six,
            Rank::Six => Rank::Seven,
            Rank::Seven => Rank::Queen,
            Rank::Queen => Rank::Jack,
            Rank::Jack => Rank::King,
            Rank::King => Rank::Ace,
            Rank::Ace => Rank::Two,
            Rank::Two => Rank::Three,
            Rank::Three => Rank::Four,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        Rank::ORDERED
            .iter()
            .copied()
            .find(|rank| rank.symbol() == upper)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

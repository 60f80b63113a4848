mod eleven;
mod params;
mod play;
mod raise;
mod response;

pub use eleven::ElevenPlanner;
pub use params::BotParams;
pub use play::PlayPlanner;
pub use raise::RaisePlanner;
pub use response::ResponsePlanner;

use core::fmt;
use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::rank::Rank;

/// A planner's answer together with the label of the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<T> {
    pub value: T,
    pub reason: &'static str,
}

impl<T> Decision<T> {
    pub const fn new(value: T, reason: &'static str) -> Self {
        Self { value, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIntent {
    /// Contest the round with the card.
    Play,
    /// Throw the card away face down, conceding the round.
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardToPlay {
    pub card: Card,
    pub intent: PlayIntent,
}

impl CardToPlay {
    pub const fn play(card: Card) -> Self {
        Self {
            card,
            intent: PlayIntent::Play,
        }
    }

    pub const fn discard(card: Card) -> Self {
        Self {
            card,
            intent: PlayIntent::Discard,
        }
    }

    pub const fn is_discard(&self) -> bool {
        matches!(self.intent, PlayIntent::Discard)
    }
}

impl fmt::Display for CardToPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intent {
            PlayIntent::Play => write!(f, "{}", self.card),
            PlayIntent::Discard => write!(f, "discard {}", self.card),
        }
    }
}

/// Reply to an opponent's truco call, ordered `Decline < Accept < Raise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum RaiseResponse {
    Decline = -1,
    Accept = 0,
    Raise = 1,
}

impl RaiseResponse {
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RaiseResponse::Decline => "decline",
            RaiseResponse::Accept => "accept",
            RaiseResponse::Raise => "raise",
        }
    }
}

impl fmt::Display for RaiseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn has_zap(hand: &Hand, vira: Card) -> bool {
    hand.iter().any(|card| card.is_zap(vira))
}

pub(crate) fn has_copas(hand: &Hand, vira: Card) -> bool {
    hand.iter().any(|card| card.is_copas(vira))
}

pub(crate) fn has_ouros(hand: &Hand, vira: Card) -> bool {
    hand.iter().any(|card| card.is_ouros(vira))
}

/// Manilhas other than the zap.
pub(crate) fn count_minor_manilhas(hand: &Hand, vira: Card) -> usize {
    hand.iter()
        .filter(|card| card.is_manilha(vira) && !card.is_zap(vira))
        .count()
}

/// Counts cards by printed rank, trump or not.
pub(crate) fn count_rank(hand: &Hand, rank: Rank) -> usize {
    hand.iter().filter(|card| card.rank == rank).count()
}

pub(crate) fn has_rank(hand: &Hand, rank: Rank) -> bool {
    hand.iter().any(|card| card.rank == rank)
}

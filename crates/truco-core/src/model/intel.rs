use crate::model::card::{Card, CardParseError};
use crate::model::hand::Hand;
use crate::model::round::RoundOutcome;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Score that wins the match.
pub const MATCH_POINT: u8 = 11;
pub const MAX_HAND_SIZE: usize = 3;
/// A hand is decided by the end of the third round, so at most two are ever behind us.
pub const MAX_COMPLETED_ROUNDS: usize = 2;

/// Read-only view of everything the acting player may observe at a decision point.
///
/// `rounds` is ordered oldest first; the round that just finished is the last
/// element, exposed through [`Intel::last_round`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intel {
    vira: Card,
    hand: Hand,
    opponent_card: Option<Card>,
    rounds: Vec<RoundOutcome>,
    score: u8,
    opponent_score: u8,
}

impl Intel {
    pub fn new(vira: Card, hand: Hand) -> Self {
        Self {
            vira,
            hand,
            opponent_card: None,
            rounds: Vec::new(),
            score: 0,
            opponent_score: 0,
        }
    }

    pub fn with_opponent_card(mut self, card: Option<Card>) -> Self {
        self.opponent_card = card;
        self
    }

    pub fn with_rounds(mut self, rounds: Vec<RoundOutcome>) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_scores(mut self, score: u8, opponent_score: u8) -> Self {
        self.score = score;
        self.opponent_score = opponent_score;
        self
    }

    pub fn vira(&self) -> Card {
        self.vira
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    pub fn rounds(&self) -> &[RoundOutcome] {
        &self.rounds
    }

    /// Outcome of the round completed immediately before the current one.
    pub fn last_round(&self) -> Option<RoundOutcome> {
        self.rounds.last().copied()
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn opponent_score(&self) -> u8 {
        self.opponent_score
    }

    /// Own score minus the opponent's, negative when trailing.
    pub fn score_lead(&self) -> i16 {
        i16::from(self.score) - i16::from(self.opponent_score)
    }

    pub fn either_at_match_point(&self) -> bool {
        self.score == MATCH_POINT || self.opponent_score == MATCH_POINT
    }

    /// Checks the structural guarantees the host owes every decision call.
    ///
    /// Scores and deck legality are the host's business and are not checked.
    pub fn validate(&self) -> Result<(), IntelError> {
        if self.hand.is_empty() {
            return Err(IntelError::EmptyHand);
        }
        if self.hand.len() > MAX_HAND_SIZE {
            return Err(IntelError::OversizedHand {
                len: self.hand.len(),
            });
        }
        if self.hand.contains(self.vira) {
            return Err(IntelError::ViraInHand(self.vira));
        }
        let cards = self.hand.cards();
        if let Some(duplicate) = cards
            .iter()
            .enumerate()
            .find(|(idx, card)| cards[..*idx].contains(card))
            .map(|(_, card)| *card)
        {
            return Err(IntelError::DuplicateCard(duplicate));
        }
        if self.rounds.len() > MAX_COMPLETED_ROUNDS {
            return Err(IntelError::TooManyRounds {
                count: self.rounds.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelError {
    EmptyHand,
    OversizedHand { len: usize },
    ViraInHand(Card),
    DuplicateCard(Card),
    TooManyRounds { count: usize },
    InvalidCard(CardParseError),
    InvalidRound(String),
}

impl fmt::Display for IntelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntelError::EmptyHand => write!(f, "hand holds no cards"),
            IntelError::OversizedHand { len } => {
                write!(f, "hand holds {len} cards, at most {MAX_HAND_SIZE} allowed")
            }
            IntelError::ViraInHand(card) => write!(f, "vira {card} also appears in the hand"),
            IntelError::DuplicateCard(card) => write!(f, "card {card} appears twice in the hand"),
            IntelError::TooManyRounds { count } => write!(
                f,
                "{count} completed rounds reported, at most {MAX_COMPLETED_ROUNDS} allowed"
            ),
            IntelError::InvalidCard(err) => write!(f, "{err}"),
            IntelError::InvalidRound(label) => {
                write!(f, "invalid round outcome '{label}': expected won, lost or drawn")
            }
        }
    }
}

impl std::error::Error for IntelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntelError::InvalidCard(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CardParseError> for IntelError {
    fn from(err: CardParseError) -> Self {
        IntelError::InvalidCard(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(text: &str) -> Card {
        text.parse().expect("valid card")
    }

    fn hand(cards: &[&str]) -> Hand {
        cards.iter().map(|text| card(text)).collect()
    }

    #[test]
    fn last_round_is_most_recent_entry() {
        let intel = Intel::new(card("4C"), hand(&["3D"]))
            .with_rounds(vec![RoundOutcome::Lost, RoundOutcome::Won]);
        assert_eq!(intel.last_round(), Some(RoundOutcome::Won));
        assert_eq!(intel.rounds_played(), 2);
    }

    #[test]
    fn last_round_absent_before_first_round() {
        let intel = Intel::new(card("4C"), hand(&["3D", "2S", "AH"]));
        assert_eq!(intel.last_round(), None);
    }

    #[test]
    fn score_lead_can_be_negative() {
        let intel = Intel::new(card("4C"), hand(&["3D"])).with_scores(2, 9);
        assert_eq!(intel.score_lead(), -7);
        assert!(!intel.either_at_match_point());
        assert!(intel.clone().with_scores(2, 11).either_at_match_point());
    }

    #[test]
    fn validate_accepts_regular_snapshot() {
        let intel = Intel::new(card("4C"), hand(&["3D", "2S", "AH"]))
            .with_opponent_card(Some(card("KH")))
            .with_scores(4, 6);
        assert_eq!(intel.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_contract_violations() {
        let vira = card("4C");
        assert_eq!(
            Intel::new(vira, Hand::new()).validate(),
            Err(IntelError::EmptyHand)
        );
        assert_eq!(
            Intel::new(vira, hand(&["3D", "2S", "AH", "KH"])).validate(),
            Err(IntelError::OversizedHand { len: 4 })
        );
        assert_eq!(
            Intel::new(vira, hand(&["3D", "4C"])).validate(),
            Err(IntelError::ViraInHand(vira))
        );
        assert_eq!(
            Intel::new(vira, hand(&["3D", "2S", "3D"])).validate(),
            Err(IntelError::DuplicateCard(card("3D")))
        );
        let rounds = vec![RoundOutcome::Won, RoundOutcome::Lost, RoundOutcome::Drawn];
        assert_eq!(
            Intel::new(vira, hand(&["3D"])).with_rounds(rounds).validate(),
            Err(IntelError::TooManyRounds { count: 3 })
        );
    }
}

use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::intel::{Intel, IntelError};
use crate::model::round::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Hand-editable JSON form of an [`Intel`], with cards written as text (`"QD"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntelSnapshot {
    pub vira: String,
    pub hand: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_card: Option<String>,
    #[serde(default)]
    pub rounds: Vec<String>,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub opponent_score: u8,
}

impl IntelSnapshot {
    pub fn capture(intel: &Intel) -> Self {
        IntelSnapshot {
            vira: intel.vira().to_string(),
            hand: intel.hand().iter().map(ToString::to_string).collect(),
            opponent_card: intel.opponent_card().map(|card| card.to_string()),
            rounds: intel
                .rounds()
                .iter()
                .map(|outcome| outcome.as_str().to_string())
                .collect(),
            score: intel.score(),
            opponent_score: intel.opponent_score(),
        }
    }

    /// Parses the text fields back into an [`Intel`]. Contract checks are left
    /// to [`Intel::validate`].
    pub fn restore(&self) -> Result<Intel, IntelError> {
        let vira: Card = self.vira.parse()?;
        let hand = self
            .hand
            .iter()
            .map(|text| text.parse::<Card>())
            .collect::<Result<Hand, _>>()?;
        let opponent_card = self
            .opponent_card
            .as_deref()
            .map(str::parse::<Card>)
            .transpose()?;
        let rounds = self
            .rounds
            .iter()
            .map(|label| label.parse::<RoundOutcome>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(IntelError::InvalidRound)?;

        Ok(Intel::new(vira, hand)
            .with_opponent_card(opponent_card)
            .with_rounds(rounds)
            .with_scores(self.score, self.opponent_score))
    }

    pub fn to_json(intel: &Intel) -> serde_json::Result<String> {
        let snapshot = Self::capture(intel);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

mod machine;

pub use machine::MachinePolicy;

use crate::bot::{CardToPlay, RaiseResponse};
use thiserror::Error;
use truco_core::model::intel::{Intel, IntelError};

/// Failures a policy reports back to the host instead of guessing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("host broke the snapshot contract: {0}")]
    Contract(#[from] IntelError),
}

/// Interface the game host drives at each decision point.
///
/// Implementations are stateless: every call depends only on the snapshot, so
/// one policy may serve any number of matches concurrently.
pub trait Policy: Send + Sync {
    /// Display name of the bot.
    fn identify(&self) -> &'static str;

    /// Play or run from a hand of eleven.
    fn accept_sudden_death(&self, intel: &Intel) -> Result<bool, DecisionError>;

    /// Call truco before playing the next card.
    fn initiate_escalation(&self, intel: &Intel) -> Result<bool, DecisionError>;

    /// Card for the current round, played face up or discarded.
    fn choose_card(&self, intel: &Intel) -> Result<CardToPlay, DecisionError>;

    /// Reply to the opponent's truco call.
    fn respond_to_escalation(&self, intel: &Intel) -> Result<RaiseResponse, DecisionError>;
}

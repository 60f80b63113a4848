use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of a completed round, seen from the acting player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Won,
    Lost,
    Drawn,
}

impl RoundOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::Won => "won",
            RoundOutcome::Lost => "lost",
            RoundOutcome::Drawn => "drawn",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "won" | "win" => Ok(RoundOutcome::Won),
            "lost" | "loss" => Ok(RoundOutcome::Lost),
            "drawn" | "draw" => Ok(RoundOutcome::Drawn),
            other => Err(other.to_string()),
        }
    }
}

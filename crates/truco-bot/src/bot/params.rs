use truco_core::model::intel::MATCH_POINT;

/// Highest opponent score at which three strong cards backed by a manilha
/// accept the hand of eleven.
pub const DEFAULT_ELEVEN_MANILHA_CEILING: u8 = 7;

/// Lowest opponent score at which three strong cards accept the hand of eleven
/// even without a manilha.
pub const DEFAULT_ELEVEN_STRONG_FLOOR: u8 = 8;

/// Lead over the opponent that must be exceeded before secondary hand signals
/// justify calling truco.
pub const DEFAULT_RAISE_LEAD_MARGIN: u8 = 3;

/// Tunable thresholds for the decision planners.
///
/// Only score thresholds live here; the hand predicates themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotParams {
    /// Hand of eleven, manilha branch: accept while opponent score <= this (default: 7)
    pub eleven_manilha_ceiling: u8,

    /// Hand of eleven, strong-cards branch: accept once opponent score >= this (default: 8)
    pub eleven_strong_floor: u8,

    /// Truco call: secondary signals apply when lead > this (default: 3)
    pub raise_lead_margin: u8,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            eleven_manilha_ceiling: DEFAULT_ELEVEN_MANILHA_CEILING,
            eleven_strong_floor: DEFAULT_ELEVEN_STRONG_FLOOR,
            raise_lead_margin: DEFAULT_RAISE_LEAD_MARGIN,
        }
    }
}

impl BotParams {
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    /// Overrides defaults with whatever `read` yields; values that do not parse
    /// as a score in `0..=11` are ignored.
    pub fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut score = |key: &str, fallback: u8| {
            read(key)
                .and_then(|raw| raw.trim().parse::<u8>().ok())
                .filter(|value| *value <= MATCH_POINT)
                .unwrap_or(fallback)
        };

        Self {
            eleven_manilha_ceiling: score(
                "TRUCO_ELEVEN_MANILHA_CEILING",
                defaults.eleven_manilha_ceiling,
            ),
            eleven_strong_floor: score("TRUCO_ELEVEN_STRONG_FLOOR", defaults.eleven_strong_floor),
            raise_lead_margin: score("TRUCO_RAISE_LEAD_MARGIN", defaults.raise_lead_margin),
        }
    }
}

use super::{DecisionError, Policy};
use crate::bot::{
    BotParams, CardToPlay, ElevenPlanner, PlayPlanner, RaisePlanner, RaiseResponse,
    ResponsePlanner,
};
use tracing::{Level, event};
use truco_core::model::intel::{Intel, IntelError};

const NAME: &str = "Truco Machine";

/// Rule-based policy wrapping the four planners.
#[derive(Debug, Clone, Copy, Default)]
pub struct MachinePolicy {
    params: BotParams,
}

impl MachinePolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn from_env() -> Self {
        Self::new(BotParams::from_env())
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }
}

impl Policy for MachinePolicy {
    fn identify(&self) -> &'static str {
        NAME
    }

    fn accept_sudden_death(&self, intel: &Intel) -> Result<bool, DecisionError> {
        intel.validate()?;
        let decision = ElevenPlanner::accepts(intel, &self.params);
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "truco_bot::eleven",
                Level::INFO,
                vira = %intel.vira(),
                hand = %hand_preview(intel),
                score = intel.score(),
                opponent_score = intel.opponent_score(),
                accept = decision.value,
                reason = decision.reason,
            );
        }
        Ok(decision.value)
    }

    fn initiate_escalation(&self, intel: &Intel) -> Result<bool, DecisionError> {
        intel.validate()?;
        let decision = RaisePlanner::should_raise(intel, &self.params);
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "truco_bot::raise",
                Level::INFO,
                vira = %intel.vira(),
                hand = %hand_preview(intel),
                opponent_card = %opponent_preview(intel),
                rounds_played = intel.rounds_played(),
                score = intel.score(),
                opponent_score = intel.opponent_score(),
                raise = decision.value,
                reason = decision.reason,
            );
        }
        Ok(decision.value)
    }

    fn choose_card(&self, intel: &Intel) -> Result<CardToPlay, DecisionError> {
        intel.validate()?;
        let decision = PlayPlanner::choose(intel).ok_or(IntelError::EmptyHand)?;
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "truco_bot::play",
                Level::INFO,
                vira = %intel.vira(),
                hand = %hand_preview(intel),
                opponent_card = %opponent_preview(intel),
                rounds_played = intel.rounds_played(),
                chosen = %decision.value,
                reason = decision.reason,
            );
        }
        Ok(decision.value)
    }

    fn respond_to_escalation(&self, intel: &Intel) -> Result<RaiseResponse, DecisionError> {
        intel.validate()?;
        let decision = ResponsePlanner::respond(intel);
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "truco_bot::response",
                Level::INFO,
                vira = %intel.vira(),
                hand = %hand_preview(intel),
                rounds_played = intel.rounds_played(),
                response = %decision.value,
                reason = decision.reason,
            );
        }
        Ok(decision.value)
    }
}

fn hand_preview(intel: &Intel) -> String {
    intel
        .hand()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn opponent_preview(intel: &Intel) -> String {
    intel
        .opponent_card()
        .map(|card| card.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::test_support::{card, hand};
    use truco_core::model::hand::Hand;

    #[test]
    fn identifies_by_display_name() {
        assert_eq!(MachinePolicy::default().identify(), "Truco Machine");
    }

    #[test]
    fn every_operation_rejects_vira_in_hand() {
        let policy = MachinePolicy::default();
        let intel = Intel::new(card("4C"), hand(&["4C", "3D"]));
        let violation = DecisionError::Contract(IntelError::ViraInHand(card("4C")));

        assert_eq!(policy.accept_sudden_death(&intel).unwrap_err(), violation);
        assert_eq!(policy.initiate_escalation(&intel).unwrap_err(), violation);
        assert_eq!(policy.choose_card(&intel).unwrap_err(), violation);
        assert_eq!(policy.respond_to_escalation(&intel).unwrap_err(), violation);
    }

    #[test]
    fn choose_card_fails_fast_on_empty_hand() {
        let policy = MachinePolicy::default();
        let intel = Intel::new(card("4C"), Hand::new());
        let err = policy.choose_card(&intel).unwrap_err();
        assert_eq!(err, DecisionError::Contract(IntelError::EmptyHand));
        assert!(err.to_string().contains("hand holds no cards"));
    }

    #[test]
    fn params_flow_into_planners() {
        let strict = MachinePolicy::new(BotParams {
            eleven_manilha_ceiling: 2,
            ..BotParams::default()
        });
        let intel = Intel::new(card("JH"), hand(&["KD", "AS", "2C"])).with_scores(10, 5);
        assert!(MachinePolicy::default().accept_sudden_death(&intel).unwrap());
        assert!(!strict.accept_sudden_death(&intel).unwrap());
        assert_eq!(strict.params().eleven_manilha_ceiling, 2);
    }

    #[test]
    fn previews_render_cards_as_text() {
        let intel = Intel::new(card("4C"), hand(&["3D", "KS"]));
        assert_eq!(hand_preview(&intel), "3D,KS");
        assert_eq!(opponent_preview(&intel), "-");
        let answered = intel.with_opponent_card(Some(card("AH")));
        assert_eq!(opponent_preview(&answered), "AH");
    }
}

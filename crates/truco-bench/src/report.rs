use serde::Serialize;
use truco_bot::{DecisionError, PlayIntent, Policy};
use truco_core::model::intel::Intel;

/// Every answer the policy gives for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionReport {
    pub bot: String,
    pub accept_sudden_death: bool,
    pub initiate_escalation: bool,
    pub card: String,
    pub discard: bool,
    pub response: String,
    pub response_code: i8,
}

impl DecisionReport {
    pub fn evaluate(policy: &dyn Policy, intel: &Intel) -> Result<Self, DecisionError> {
        let accept_sudden_death = policy.accept_sudden_death(intel)?;
        let initiate_escalation = policy.initiate_escalation(intel)?;
        let choice = policy.choose_card(intel)?;
        let response = policy.respond_to_escalation(intel)?;

        Ok(Self {
            bot: policy.identify().to_string(),
            accept_sudden_death,
            initiate_escalation,
            card: choice.card.to_string(),
            discard: matches!(choice.intent, PlayIntent::Discard),
            response: response.as_str().to_string(),
            response_code: response.as_i8(),
        })
    }
}

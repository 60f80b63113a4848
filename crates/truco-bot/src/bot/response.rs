use super::{Decision, RaiseResponse, count_minor_manilhas, has_copas, has_zap};
use truco_core::model::intel::Intel;

/// Answers a truco call from the opponent.
pub struct ResponsePlanner;

impl ResponsePlanner {
    pub fn respond(intel: &Intel) -> Decision<RaiseResponse> {
        let hand = intel.hand();
        let vira = intel.vira();
        let zap = has_zap(hand, vira);

        if zap && has_copas(hand, vira) {
            return Decision::new(RaiseResponse::Raise, "zap_and_copas");
        }
        if zap && count_minor_manilhas(hand, vira) >= 1 && intel.rounds_played() == 0 {
            return Decision::new(RaiseResponse::Accept, "zap_and_manilha_first_round");
        }
        Decision::new(RaiseResponse::Decline, "no_signal")
    }
}

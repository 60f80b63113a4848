use super::{
    BotParams, Decision, count_minor_manilhas, count_rank, has_copas, has_ouros, has_rank,
    has_zap,
};
use std::cmp::Ordering;
use truco_core::model::intel::{Intel, MAX_COMPLETED_ROUNDS};
use truco_core::model::rank::Rank;
use truco_core::model::round::RoundOutcome;

const THREES_FOR_RAISE: usize = 3;
const MANILHAS_AFTER_LOSS: usize = 2;

/// Decides whether to call truco on our own initiative.
pub struct RaisePlanner;

impl RaisePlanner {
    pub fn should_raise(intel: &Intel, params: &BotParams) -> Decision<bool> {
        if intel.either_at_match_point() {
            return Decision::new(false, "match_point");
        }

        let hand = intel.hand();
        let vira = intel.vira();

        if has_zap(hand, vira) && count_minor_manilhas(hand, vira) >= 1 {
            return Decision::new(true, "zap_and_manilha");
        }

        if intel.score_lead() > i16::from(params.raise_lead_margin) {
            let manilhas = hand.count_manilhas(vira);
            if manilhas >= 1 && has_rank(hand, Rank::Three) {
                return Decision::new(true, "lead_manilha_and_three");
            }
            if count_rank(hand, Rank::Three) == THREES_FOR_RAISE {
                return Decision::new(true, "lead_three_threes");
            }
            match intel.last_round() {
                Some(RoundOutcome::Won) => {
                    if manilhas >= 1 && has_rank(hand, Rank::Two) {
                        return Decision::new(true, "lead_won_manilha_and_two");
                    }
                    if has_ouros(hand, vira) && has_rank(hand, Rank::King) {
                        return Decision::new(true, "lead_won_ouros_and_king");
                    }
                }
                Some(RoundOutcome::Lost) if manilhas == MANILHAS_AFTER_LOSS => {
                    return Decision::new(true, "lead_lost_two_manilhas");
                }
                _ => {}
            }
        }

        if intel.rounds_played() == MAX_COMPLETED_ROUNDS
            && let Some(last) = hand.first()
        {
            let beats_opponent = intel
                .opponent_card()
                .is_some_and(|opponent| last.compare(opponent, vira) == Ordering::Greater);
            if beats_opponent {
                return Decision::new(true, "last_card_beats_opponent");
            }
            if last.is_zap(vira) {
                return Decision::new(true, "last_card_is_zap");
            }
        }

        if intel.last_round() == Some(RoundOutcome::Won)
            && (has_zap(hand, vira) || has_copas(hand, vira))
        {
            return Decision::new(true, "won_last_with_zap_or_copas");
        }

        Decision::new(false, "no_signal")
    }
}

use super::{BotParams, Decision};
use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::intel::{Intel, MATCH_POINT};
use truco_core::model::rank::Rank;

/// Plain cards must rank strictly above this to count as strong.
const STRONG_RANK_FLOOR: Rank = Rank::King;
const STRONG_HAND_SIZE: usize = 3;

/// Decides whether to play a hand of eleven.
pub struct ElevenPlanner;

impl ElevenPlanner {
    pub fn accepts(intel: &Intel, params: &BotParams) -> Decision<bool> {
        let opponent = intel.opponent_score();
        if opponent == MATCH_POINT {
            return Decision::new(true, "opponent_at_match_point");
        }

        let hand = intel.hand();
        let vira = intel.vira();
        let strong = count_strong(hand, vira);
        let manilhas = hand.count_manilhas(vira);

        if strong == STRONG_HAND_SIZE && manilhas >= 1 && opponent <= params.eleven_manilha_ceiling
        {
            return Decision::new(true, "strong_hand_with_manilha");
        }
        if strong == STRONG_HAND_SIZE && opponent >= params.eleven_strong_floor {
            return Decision::new(true, "strong_hand_opponent_close");
        }
        Decision::new(false, "weak_hand")
    }
}

fn count_strong(hand: &Hand, vira: Card) -> usize {
    hand.iter()
        .filter(|card| card.is_manilha(vira) || card.rank > STRONG_RANK_FLOOR)
        .count()
}

use super::{CardToPlay, Decision, has_zap};
use std::cmp::Ordering;
use truco_core::model::intel::Intel;
use truco_core::model::round::RoundOutcome;

/// Picks the card for the current round.
///
/// The planner never spends more than it has to: when answering an exposed
/// card it plays the cheapest winner, and when it cannot win it keeps its
/// strong cards unless a draw is on the table.
pub struct PlayPlanner;

impl PlayPlanner {
    /// Returns `None` only for an empty hand.
    pub fn choose(intel: &Intel) -> Option<Decision<CardToPlay>> {
        let hand = intel.hand();
        let vira = intel.vira();
        let strongest = hand.strongest(vira)?;
        let weakest = hand.weakest(vira)?;

        if intel.last_round() == Some(RoundOutcome::Won) && has_zap(hand, vira) {
            return Some(Decision::new(
                CardToPlay::discard(weakest),
                "won_last_hold_zap",
            ));
        }

        let Some(opponent) = intel.opponent_card() else {
            return Some(Decision::new(CardToPlay::play(strongest), "lead_strongest"));
        };

        let decision = match hand.cheapest_winner(opponent, vira) {
            Some(winner) => Decision::new(CardToPlay::play(winner), "cheapest_winner"),
            None if strongest.compare(opponent, vira) == Ordering::Equal => {
                Decision::new(CardToPlay::play(strongest), "force_draw")
            }
            None => Decision::new(CardToPlay::play(weakest), "concede_weakest"),
        };
        Some(decision)
    }
}

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use truco_core::model::deck::Deck;
use truco_core::model::hand::Hand;
use truco_core::model::intel::{Intel, MATCH_POINT, MAX_COMPLETED_ROUNDS, MAX_HAND_SIZE};
use truco_core::model::round::RoundOutcome;

/// Histories that leave the hand undecided going into the third round.
const OPEN_TWO_ROUND_HISTORIES: [[RoundOutcome; 2]; 3] = [
    [RoundOutcome::Won, RoundOutcome::Lost],
    [RoundOutcome::Lost, RoundOutcome::Won],
    [RoundOutcome::Drawn, RoundOutcome::Drawn],
];

const ONE_ROUND_HISTORIES: [RoundOutcome; 3] = [
    RoundOutcome::Won,
    RoundOutcome::Lost,
    RoundOutcome::Drawn,
];

/// A dealt snapshot plus the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct SampledDeal {
    pub seed: u64,
    pub intel: Intel,
}

/// Seeded source of valid mid-hand snapshots.
pub struct ScenarioSampler {
    rng: StdRng,
}

impl ScenarioSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_deal(&mut self) -> Option<SampledDeal> {
        let seed = self.rng.next_u64();
        deal_from_seed(seed).map(|intel| SampledDeal { seed, intel })
    }
}

/// Deals one snapshot; the same seed always yields the same snapshot.
pub fn deal_from_seed(seed: u64) -> Option<Intel> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = Deck::shuffled(&mut rng);

    let rounds = sample_history(&mut rng);
    let vira = deck.draw()?;
    let hand: Hand = deck
        .draw_many(MAX_HAND_SIZE - rounds.len())
        .into_iter()
        .collect();
    let opponent_card = if rng.gen_bool(0.5) {
        deck.draw()
    } else {
        None
    };
    let (score, opponent_score) = sample_scores(&mut rng);

    Some(
        Intel::new(vira, hand)
            .with_opponent_card(opponent_card)
            .with_rounds(rounds)
            .with_scores(score, opponent_score),
    )
}

fn sample_history(rng: &mut StdRng) -> Vec<RoundOutcome> {
    match rng.gen_range(0..=MAX_COMPLETED_ROUNDS) {
        0 => Vec::new(),
        1 => ONE_ROUND_HISTORIES
            .choose(rng)
            .map(|outcome| vec![*outcome])
            .unwrap_or_default(),
        _ => OPEN_TWO_ROUND_HISTORIES
            .choose(rng)
            .map(|pair| pair.to_vec())
            .unwrap_or_default(),
    }
}

fn sample_scores(rng: &mut StdRng) -> (u8, u8) {
    let score = rng.gen_range(0..=MATCH_POINT);
    let ceiling = if score == MATCH_POINT {
        MATCH_POINT - 1
    } else {
        MATCH_POINT
    };
    (score, rng.gen_range(0..=ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_is_reproducible_for_a_seed() {
        let mut first = ScenarioSampler::new(7);
        let mut second = ScenarioSampler::new(7);
        for _ in 0..16 {
            let a = first.next_deal().expect("deal");
            let b = second.next_deal().expect("deal");
            assert_eq!(a.seed, b.seed);
            assert_eq!(a.intel, b.intel);
        }
    }

    #[test]
    fn deal_seed_replays_the_snapshot() {
        let mut sampler = ScenarioSampler::new(99);
        let deal = sampler.next_deal().expect("deal");
        assert_eq!(deal_from_seed(deal.seed), Some(deal.intel));
    }

    #[test]
    fn sampled_snapshots_satisfy_the_contract() {
        let mut sampler = ScenarioSampler::new(2024);
        for _ in 0..500 {
            let intel = sampler.next_deal().expect("deal").intel;
            intel.validate().expect("sampled snapshot is valid");
            assert_eq!(intel.hand().len() + intel.rounds_played(), MAX_HAND_SIZE);
            assert!(intel.score() <= MATCH_POINT);
            assert!(intel.opponent_score() <= MATCH_POINT);
            assert!(!(intel.score() == MATCH_POINT && intel.opponent_score() == MATCH_POINT));
            if let Some(card) = intel.opponent_card() {
                assert!(!intel.hand().contains(card));
                assert_ne!(card, intel.vira());
            }
        }
    }

    #[test]
    fn two_round_histories_keep_the_hand_open() {
        let mut sampler = ScenarioSampler::new(5);
        for _ in 0..500 {
            let intel = sampler.next_deal().expect("deal").intel;
            if let [first, second] = intel.rounds() {
                assert!(
                    OPEN_TWO_ROUND_HISTORIES.contains(&[*first, *second]),
                    "unexpected history {first} {second}"
                );
            }
        }
    }
}

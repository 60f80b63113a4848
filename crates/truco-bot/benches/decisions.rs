use criterion::{Criterion, black_box, criterion_group, criterion_main};
use truco_bot::{MachinePolicy, Policy};
use truco_core::model::deck::Deck;
use truco_core::model::hand::Hand;
use truco_core::model::intel::Intel;
use truco_core::model::round::RoundOutcome;

fn dealt_intel(seed: u64, rounds: Vec<RoundOutcome>, answered: bool) -> Intel {
    let mut deck = Deck::shuffled_with_seed(seed);
    let vira = deck.draw().expect("vira");
    let hand: Hand = deck.draw_many(3 - rounds.len()).into_iter().collect();
    let opponent = if answered { deck.draw() } else { None };
    Intel::new(vira, hand)
        .with_opponent_card(opponent)
        .with_rounds(rounds)
        .with_scores(7, 3)
}

fn decision_bench(c: &mut Criterion) {
    let policy = MachinePolicy::default();
    let mut group = c.benchmark_group("machine_decision");
    for (label, intel) in [
        ("opening_lead", dealt_intel(1040, Vec::new(), false)),
        ("second_round_answer", dealt_intel(1082, vec![RoundOutcome::Won], true)),
        (
            "final_round_answer",
            dealt_intel(1145, vec![RoundOutcome::Lost, RoundOutcome::Won], true),
        ),
    ] {
        group.bench_function(format!("all_four_{label}"), |b| {
            b.iter(|| {
                let intel = black_box(&intel);
                let _ = black_box(policy.accept_sudden_death(intel));
                let _ = black_box(policy.initiate_escalation(intel));
                let _ = black_box(policy.choose_card(intel));
                let _ = black_box(policy.respond_to_escalation(intel));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, decision_bench);
criterion_main!(benches);

//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use team_elo::rating::{update_1v1, update_team_v_team, EloCalculator};
use team_elo::types::{Outcome, Player};

fn roster(size: usize, base: f64) -> Vec<Player> {
    (0..size)
        .map(|i| Player::new(base + (i as f64 * 25.0), 32.0))
        .collect()
}

fn bench_1v1(c: &mut Criterion) {
    c.bench_function("update_1v1", |b| {
        b.iter(|| {
            let mut player1 = Player::new(1500.0, 32.0);
            let mut player2 = Player::new(1620.0, 32.0);
            black_box(update_1v1(&mut player1, &mut player2, black_box(1.0)))
        })
    });
}

fn bench_team_v_team(c: &mut Criterion) {
    let team1 = roster(5, 1400.0);
    let team2 = roster(5, 1450.0);

    c.bench_function("update_team_v_team_5v5", |b| {
        b.iter(|| {
            let mut team1 = team1.clone();
            let mut team2 = team2.clone();
            black_box(update_team_v_team(
                &mut team1,
                &mut team2,
                black_box(0.0),
                32.0,
                32.0,
            ))
        })
    });
}

fn bench_calculator_round_robin(c: &mut Criterion) {
    let calculator = EloCalculator::default();

    c.bench_function("calculator_round_robin_8", |b| {
        b.iter(|| {
            let mut players = roster(8, 1500.0);
            for winner in 0..players.len() {
                for loser in (winner + 1)..players.len() {
                    let (left, right) = players.split_at_mut(loser);
                    calculator
                        .rate_1v1(&mut left[winner], &mut right[0], Outcome::Win)
                        .unwrap();
                }
            }
            black_box(players)
        })
    });
}

criterion_group!(
    benches,
    bench_1v1,
    bench_team_v_team,
    bench_calculator_round_robin
);
criterion_main!(benches);

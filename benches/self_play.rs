use altar_engine::core::{RoundConfig, Side};
use altar_engine::policy::GreedyOpponent;
use altar_engine::rules::{TurnEngine, TurnState};
use altar_engine::session::Session;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const MAX_TURNS: usize = 500;

fn play_round(session: &mut Session) -> TurnState {
    for _ in 0..MAX_TURNS {
        let result = match session.engine().state() {
            TurnState::PlayerTurn => session.run_turn_with(Side::Player, &GreedyOpponent),
            TurnState::CpuTurn => session.run_cpu_turn(),
            state => return state,
        };
        if result.is_err() {
            break;
        }
    }
    session.engine().state()
}

fn self_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    for hand_size in [4usize, 7, 10] {
        let config = RoundConfig::default().with_seed(99).with_hand_size(hand_size);

        group.bench_function(BenchmarkId::new("greedy_round", hand_size), |b| {
            let mut session = Session::new(config.clone()).expect("valid config");
            b.iter(|| {
                session.restart_round().expect("deal");
                session.drain_events();
                black_box(play_round(&mut session))
            })
        });

        group.bench_function(BenchmarkId::new("deal", hand_size), |b| {
            let mut engine = TurnEngine::new(config.clone()).expect("valid config");
            b.iter(|| {
                let event = engine.start_round(hand_size).expect("deal");
                engine.drain_events();
                black_box(event)
            })
        });
    }
    group.finish();
}

fn legal_moves(c: &mut Criterion) {
    let engine = TurnEngine::new(RoundConfig::default().with_seed(3).with_hand_size(10))
        .expect("valid config");

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(engine.legal_moves(Side::Player)))
    });
}

criterion_group!(benches, self_play, legal_moves);
criterion_main!(benches);

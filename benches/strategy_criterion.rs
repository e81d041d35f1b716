use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use queen_race_checkers::engines::engine_longest_capture::LongestCaptureEngine;
use queen_race_checkers::engines::engine_trait::ComputerStrategy;
use queen_race_checkers::game_state::board::Board;
use queen_race_checkers::game_state::checkers_rules::STARTING_LAYOUT;
use queen_race_checkers::game_state::checkers_types::Color;
use queen_race_checkers::move_generation::rules_engine::RulesEngine;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    white_moves: usize,
    black_sequence_len: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_LAYOUT,
        white_moves: 7,
        black_sequence_len: 1,
    },
    BenchCase {
        name: "three_jump_chain",
        layout: "1b6/2w5/1b6/2w1w3/8/2w3w1/8/8",
        white_moves: 9,
        black_sequence_len: 3,
    },
    BenchCase {
        name: "midgame",
        layout: "1b1b1b2/b5b1/3b1b2/2w1b3/1w3w2/8/1w1w1w1w/w7",
        white_moves: 11,
        black_sequence_len: 2,
    },
];

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = Board::from_layout(case.layout).expect("benchmark layout should parse");

        // Correctness guard before benchmarking.
        let moves = RulesEngine.legal_moves(&board, Color::White);
        assert_eq!(moves.len(), case.white_moves, "move count mismatch for {}", case.name);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(RulesEngine.legal_moves(black_box(board), Color::White).len()));
        });
    }

    group.finish();
}

fn bench_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_capture");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = Board::from_layout(case.layout).expect("benchmark layout should parse");
        let mut engine = LongestCaptureEngine::from_seed(0x5EED);

        let warmup = engine.choose_move_sequence(&board, &RulesEngine);
        assert_eq!(
            warmup.len(),
            case.black_sequence_len,
            "sequence length mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(engine.choose_move_sequence(black_box(board), &RulesEngine)));
        });
    }

    group.finish();
}

criterion_group!(strategy_benches, bench_legal_moves, bench_strategy);
criterion_main!(strategy_benches);

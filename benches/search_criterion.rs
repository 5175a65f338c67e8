use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_chess::game_state::chess_types::{Color, Difficulty};
use grid_chess::move_generation::perft::perft;
use grid_chess::search::board_scoring::MaterialScorer;
use grid_chess::search::minimax::search_best_move;
use grid_chess::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct PerftCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const PERFT_CASES: &[PerftCase] = &[
    PerftCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        expected_nodes: &[20, 400, 8902],
    },
    PerftCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2810],
    },
];

const SEARCH_CASES: &[(&str, &str)] = &[
    (
        "after_e4",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1",
    ),
    (
        "italian",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b - - 0 1",
    ),
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in PERFT_CASES {
        let (board, turn) = parse_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before timing.
            let warmup = perft(&board, turn, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&board), turn, black_box(depth));
                        assert_eq!(counts.nodes as u64, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for (name, fen) in SEARCH_CASES {
        let (board, turn) = parse_fen(fen).expect("benchmark FEN should parse");
        assert_eq!(turn, Color::Dark);

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let depth = difficulty.search_depth();
            let reference = search_best_move(&board, depth, &MaterialScorer);
            assert!(reference.best_move.is_some(), "{name} should have a move");

            group.bench_function(BenchmarkId::new(*name, difficulty), |b| {
                b.iter(|| {
                    let result = search_best_move(black_box(&board), depth, &MaterialScorer);
                    assert_eq!(result, reference);
                    black_box(result.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_perft, bench_search);
criterion_main!(search_benches);

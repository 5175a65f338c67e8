use grid_chess::game_state::board::Board;
use grid_chess::game_state::chess_types::*;
use grid_chess::move_generation::game_status::game_status;
use grid_chess::move_generation::legal_move_apply::apply_move;
use grid_chess::move_generation::legal_move_checks::is_king_in_check;
use grid_chess::move_generation::legal_move_generator::{all_legal_moves, legal_moves};
use grid_chess::move_generation::pseudo_legal::pseudo_legal_moves;
use grid_chess::search::board_scoring::evaluate;
use grid_chess::utils::algebraic::algebraic_to_position;
use grid_chess::utils::fen_parser::parse_fen;
use grid_chess::utils::long_algebraic::long_algebraic_to_move;

const SAMPLE_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1",
    "4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1",
    "8/P6k/8/8/8/8/p6K/8 w - - 0 1",
];

fn board(fen: &str) -> Board {
    parse_fen(fen).expect("test FEN should parse").0
}

fn sq(text: &str) -> Position {
    algebraic_to_position(text).expect("test square should parse")
}

fn mv(text: &str) -> Move {
    long_algebraic_to_move(text).expect("test move should parse")
}

#[test]
fn legal_moves_are_a_subset_of_pseudo_legal_moves() {
    for fen in SAMPLE_FENS {
        let board = board(fen);
        for (from, _) in board.pieces() {
            let pseudo = pseudo_legal_moves(&board, from);
            for to in legal_moves(&board, from) {
                assert!(pseudo.contains(&to), "{fen}: {from}{to} is not pseudo-legal");
            }
        }
    }
}

#[test]
fn no_legal_move_leaves_the_mover_in_check() {
    for fen in SAMPLE_FENS {
        let board = board(fen);
        for color in [Color::Light, Color::Dark] {
            for candidate in all_legal_moves(&board, color) {
                let next = apply_move(&board, candidate);
                assert!(
                    !is_king_in_check(&next, color),
                    "{fen}: {}{} leaves {color} in check",
                    candidate.from,
                    candidate.to
                );
            }
        }
    }
}

#[test]
fn pseudo_legal_generation_is_idempotent() {
    for fen in SAMPLE_FENS {
        let board = board(fen);
        let snapshot = board;
        for (from, _) in board.pieces() {
            assert_eq!(pseudo_legal_moves(&board, from), pseudo_legal_moves(&board, from));
        }
        assert_eq!(board, snapshot);
    }
}

#[test]
fn initial_position_has_twenty_moves_and_even_material() {
    let board = Board::new_game();
    assert_eq!(all_legal_moves(&board, Color::Light).len(), 20);
    assert_eq!(evaluate(&board), 0);
    assert_eq!(game_status(&board, Color::Light), GameStatus::Playing);
}

#[test]
fn guarded_queen_next_to_the_king_is_checkmate() {
    let board = board("8/8/8/8/8/1k6/q7/K7 w - - 0 1");
    assert!(is_king_in_check(&board, Color::Light));
    assert!(all_legal_moves(&board, Color::Light).is_empty());
    assert_eq!(game_status(&board, Color::Light), GameStatus::Checkmate);
}

#[test]
fn boxed_in_king_without_check_is_stalemate() {
    let board = board("8/8/8/8/8/1k6/2q5/K7 w - - 0 1");
    assert!(!is_king_in_check(&board, Color::Light));
    assert!(all_legal_moves(&board, Color::Light).is_empty());
    assert_eq!(game_status(&board, Color::Light), GameStatus::Stalemate);
}

#[test]
fn pawns_promote_to_queens_on_the_last_rank() {
    let board = board("8/P6k/8/8/8/8/p6K/8 w - - 0 1");

    let white = apply_move(&board, mv("a7a8"));
    assert_eq!(
        white.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::Light))
    );
    assert!(white.is_empty_at(sq("a7")));

    let black = apply_move(&board, mv("a2a1"));
    assert_eq!(
        black.piece_at(sq("a1")),
        Some(Piece::new(PieceKind::Queen, Color::Dark))
    );

    // The source board is never touched.
    assert_eq!(
        board.piece_at(sq("a7")),
        Some(Piece::new(PieceKind::Pawn, Color::Light))
    );
}

#[test]
fn pinned_piece_cannot_leave_the_line() {
    let board = board("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    let moves = legal_moves(&board, sq("e2"));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|to| to.file == sq("e2").file));
    assert!(moves.contains(&sq("e7")));
}

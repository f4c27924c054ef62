//! Edge case tests for special chess positions and moves.

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn destinations_from(board: &mut Board, from: &str) -> Vec<String> {
    let mut out: Vec<String> = board
        .legal_moves()
        .iter()
        .filter(|m| m.from() == sq(from))
        .map(|m| m.to().to_string())
        .collect();
    out.sort();
    out
}

#[test]
fn test_stalemate_position() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_side_without_pieces_is_stalemated() {
    let mut board = Board::from_fen("8/8/8/8/8/8/8/4K3 b - - 0 1");
    assert!(!board.is_in_check());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_underpromotions_available_and_applied() {
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = board
            .find_legal_move(sq("a7"), sq("a8"), Some(piece))
            .unwrap();
        board.apply_move(mv);
        assert_eq!(board.piece_at(sq("a8")), Some((Color::White, piece)));
    }
}

#[test]
fn test_promotion_capture_on_corner_clears_right() {
    let mut board = Board::from_fen("r3k2r/1P6/8/8/8/8/8/4K3 w kq - 0 1");
    let mv = board
        .find_legal_move(sq("b7"), sq("a8"), Some(Piece::Queen))
        .unwrap();
    assert!(mv.is_capture());
    assert!(mv.is_promotion());
    board.apply_move(mv);
    assert_eq!(board.castling_rights().to_fen(), "k");
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
}

#[test]
fn test_castling_offered_on_both_wings_with_correct_rook() {
    let mut board =
        Board::from_fen("r3k2r/pbppqppp/1pn2n2/1Bb1p3/4P3/1PN2N2/PBPPQPPP/R3K2R w KQkq - 0 1");
    let castles: Vec<_> = board
        .legal_moves()
        .iter()
        .filter(|m| m.is_castling())
        .collect();
    let mut targets: Vec<String> = castles.iter().map(|m| m.to().to_string()).collect();
    targets.sort();
    assert_eq!(targets, vec!["c1", "g1"]);

    for mv in castles {
        let (rook_from, rook_to) = mv.castling_rook().unwrap();
        board.apply_move(mv);
        assert_eq!(board.piece_at(rook_to), Some((Color::White, Piece::Rook)));
        assert_eq!(board.piece_at(rook_from), None);
        board.undo_move();
    }
}

#[test]
fn test_en_passant_only_right_after_double_step() {
    let mut board = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
    let double = board.find_legal_move(sq("e2"), sq("e4"), None).unwrap();
    board.apply_move(double);
    let ep = board.find_legal_move(sq("d4"), sq("e3"), None).unwrap();
    assert!(ep.is_en_passant());
    assert_eq!(ep.en_passant_capture(), Some(sq("e4")));

    // one tempo later the right has lapsed
    let king = board.find_legal_move(sq("e8"), sq("d8"), None).unwrap();
    board.apply_move(king);
    let white_king = board.find_legal_move(sq("e1"), sq("f1"), None).unwrap();
    board.apply_move(white_king);
    assert!(board.find_legal_move(sq("d4"), sq("e3"), None).is_none());
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let mut board = Board::from_fen("4k3/8/3N4/q7/8/8/8/4R2K b - - 0 1");
    assert!(board.is_in_check());
    assert_eq!(board.attackers(sq("e8"), Color::White).len(), 2);
    let moves = board.legal_moves();
    assert!(moves.iter().all(|m| m.piece() == Piece::King));
    assert_eq!(destinations_from(&mut board, "e8"), vec!["d7", "d8", "f8"]);
}

#[test]
fn test_single_check_can_be_blocked() {
    let mut board = Board::from_fen("R3k3/8/8/8/5b2/8/8/4K3 b - - 0 1");
    assert!(board.is_in_check());
    let blocks: Vec<String> = board
        .legal_moves()
        .iter()
        .filter(|m| m.piece() == Piece::Bishop)
        .map(|m| m.to().to_string())
        .collect();
    assert_eq!(blocks, vec!["b8"]);
    assert_eq!(destinations_from(&mut board, "e8"), vec!["d7", "e7", "f7"]);
}

#[test]
fn test_kingless_position_has_no_check() {
    let mut board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, Piece::Rook)
        .piece(sq("d8"), Color::Black, Piece::Rook)
        .build()
        .unwrap();
    assert!(!board.is_in_check());
    assert_eq!(board.king_square(Color::White), None);
    // the rook moves freely along its lines, stopping at the capture on d8
    assert_eq!(board.legal_moves_from(sq("d4")).unwrap().len(), 14);
}

#[test]
fn test_fullmove_and_halfmove_survive_round_trip() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w Q - 37 81";
    let mut board = Board::from_fen(fen);
    let mv = board.find_legal_move(sq("a1"), sq("a2"), None).unwrap();
    board.apply_move(mv);
    assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/R7/4K3 b - - 38 81");
    board.undo_move();
    assert_eq!(board.to_fen(), fen);
}

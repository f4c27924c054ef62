#![cfg(feature = "serde")]

use chess_rules::{run_perft, Board, Move, PerftOptions, PerftReport, Square, StopFlag};

#[test]
fn perft_report_round_trips_through_json() {
    let report = run_perft(&Board::new(), &PerftOptions::new(2), &StopFlag::new());
    let json = serde_json::to_string(&report).unwrap();
    let back: PerftReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn perft_options_fill_defaults() {
    let options: PerftOptions = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
    assert_eq!(options, PerftOptions::new(4));
    let options: PerftOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, PerftOptions::default());
}

#[test]
fn snapshot_and_moves_round_trip() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let snapshot = board.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(serde_json::from_str::<chess_rules::BoardSnapshot>(&json).unwrap(), snapshot);

    let moves: Vec<Move> = board.legal_moves_classified().to_vec();
    let json = serde_json::to_string(&moves).unwrap();
    let back: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, moves);

    let square: Square = serde_json::from_str(&serde_json::to_string(&Square::ALL[9]).unwrap()).unwrap();
    assert_eq!(square, Square::ALL[9]);
}

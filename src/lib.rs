//! Chess rules engine: legal move generation, move application with undo,
//! post-move classification (check, discovered check, double check, mate, stalemate)
//! and perft statistics.
//!
//! # Example
//! ```
//! use chess_rules::{Board, PerftOptions, StopFlag};
//!
//! let mut board = Board::new();
//! assert_eq!(board.perft(2), 400);
//!
//! let report = chess_rules::run_perft(&board, &PerftOptions::default(), &StopFlag::new());
//! assert!(report.completed);
//! assert_eq!(report.depth(1).map(|c| c.nodes), Some(20));
//! ```

/// Forward to the `log` crate when the `logging` feature is enabled; expand to nothing otherwise.
macro_rules! log_at {
    ($level:ident, $($arg:tt)+) => {
        {
            #[cfg(feature = "logging")]
            log::$level!($($arg)+);
        }
    };
}
pub(crate) use log_at;

pub mod board;
pub mod perft;
pub mod sync;

pub use board::{
    Board, BoardBuilder, BoardError, BoardSnapshot, CastlingRights, Color, FenError, Move,
    MoveFlags, MoveList, Piece, Square, SquareError,
};
pub use perft::{run_perft, PerftCounts, PerftOptions, PerftReport};
pub use sync::StopFlag;

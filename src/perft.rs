//! Perft: exhaustive legal-move tree walks with per-depth statistics.
//!
//! `Board::perft` is the plain node counter used for move generator validation.
//! `run_perft` also classifies every move it visits and tallies captures, en passant
//! captures, castles, promotions, checks (discovered and double included) and game-ending
//! moves, one `PerftCounts` per depth.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{terminal_flag, Board, Move, MoveFlags, MoveList};
use crate::sync::StopFlag;

/// Move statistics for one depth of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub discovery_checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
    pub stalemates: u64,
}

impl PerftCounts {
    /// Count one visited move with its full flags.
    pub fn record(&mut self, flags: MoveFlags) {
        self.nodes += 1;
        self.captures += u64::from(flags.is_capture());
        self.en_passants += u64::from(flags.is_en_passant());
        self.castles += u64::from(flags.is_castling());
        self.promotions += u64::from(flags.is_promotion());
        self.checks += u64::from(flags.is_check());
        self.discovery_checks += u64::from(flags.is_discovery_check());
        self.double_checks += u64::from(flags.is_double_check());
        self.checkmates += u64::from(flags.is_checkmate());
        self.stalemates += u64::from(flags.is_stalemate());
    }

    /// Add another set of counts into this one. Merging is associative and commutative.
    pub fn merge(&mut self, other: &PerftCounts) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passants += other.en_passants;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.discovery_checks += other.discovery_checks;
        self.double_checks += other.double_checks;
        self.checkmates += other.checkmates;
        self.stalemates += other.stalemates;
    }
}

/// Result of a perft walk: counts keyed by depth (1 = moves from the root).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftReport {
    pub depths: BTreeMap<usize, PerftCounts>,
    /// False when the walk was cancelled before visiting the whole tree.
    pub completed: bool,
}

impl PerftReport {
    #[must_use]
    pub fn depth(&self, depth: usize) -> Option<&PerftCounts> {
        self.depths.get(&depth)
    }

    /// Merge another report depth by depth. The result is complete only if both are.
    pub fn merge(&mut self, other: &PerftReport) {
        for (&depth, counts) in &other.depths {
            self.depths.entry(depth).or_default().merge(counts);
        }
        self.completed &= other.completed;
    }

    fn from_levels(levels: &[PerftCounts], completed: bool) -> Self {
        let depths = levels
            .iter()
            .enumerate()
            .map(|(ply, counts)| (ply + 1, *counts))
            .collect();
        PerftReport { depths, completed }
    }
}

/// Perft walk configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerftOptions {
    /// Deepest ply to walk. 0 yields an empty, complete report.
    pub max_depth: usize,
    /// Worker threads. 0 or 1 walks on the calling thread.
    pub threads: usize,
}

impl Default for PerftOptions {
    fn default() -> Self {
        PerftOptions {
            max_depth: 1,
            threads: 1,
        }
    }
}

impl PerftOptions {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        PerftOptions {
            max_depth,
            threads: 1,
        }
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Board {
    /// Count the leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }

    /// Leaf counts below each root move, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.legal_moves();
        let mut divide = Vec::with_capacity(moves.len());
        for mv in moves {
            self.apply_move(mv);
            let nodes = self.perft(depth - 1);
            self.undo_move();
            crate::log_at!(debug, "{mv}: {nodes}");
            divide.push((mv, nodes));
        }
        divide
    }
}

/// Walk every move in `moves` (the legal moves at `ply`) and everything below it.
///
/// Returns false if `stop` was raised before the subtree was finished.
fn walk(
    board: &mut Board,
    moves: MoveList,
    ply: usize,
    levels: &mut [PerftCounts],
    stop: &StopFlag,
) -> bool {
    for mv in moves {
        if stop.is_stopped() {
            return false;
        }
        board.apply_move(mv);
        let (mut flags, in_check) = board.check_flags(mv);
        let mut finished = true;
        if ply < levels.len() {
            let replies = board.legal_moves();
            if replies.is_empty() {
                flags |= terminal_flag(in_check);
            } else {
                finished = walk(board, replies, ply + 1, levels, stop);
            }
        } else if !board.has_legal_move() {
            flags |= terminal_flag(in_check);
        }
        levels[ply - 1].record(flags);
        board.undo_move();
        if !finished {
            return false;
        }
    }
    true
}

/// Walk the legal move tree of `board` to `options.max_depth`, collecting per-depth counts.
///
/// Root moves are shared out among `options.threads` scoped workers, each on its own
/// board clone. Raising `stop` ends the walk early with `completed == false` and whatever
/// was counted so far.
pub fn run_perft(board: &Board, options: &PerftOptions, stop: &StopFlag) -> PerftReport {
    let max_depth = options.max_depth;
    if max_depth == 0 {
        return PerftReport {
            depths: BTreeMap::new(),
            completed: true,
        };
    }

    let mut root = board.clone();
    let root_moves = root.legal_moves();
    let threads = options.threads.clamp(1, root_moves.len().max(1));
    crate::log_at!(
        info,
        "perft to depth {} over {} root moves on {} thread(s)",
        max_depth,
        root_moves.len(),
        threads
    );

    let report = if threads == 1 {
        let mut levels = vec![PerftCounts::default(); max_depth];
        let completed = walk(&mut root, root_moves, 1, &mut levels, stop);
        PerftReport::from_levels(&levels, completed)
    } else {
        let shared = Mutex::new(PerftReport {
            depths: BTreeMap::new(),
            completed: true,
        });
        let next = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| {
                    let mut local = board.clone();
                    let mut levels = vec![PerftCounts::default(); max_depth];
                    let mut completed = true;
                    while let Some(mv) = root_moves.get(next.fetch_add(1, Ordering::Relaxed)) {
                        let mut single = MoveList::new();
                        single.push(mv);
                        if !walk(&mut local, single, 1, &mut levels, stop) {
                            completed = false;
                            break;
                        }
                    }
                    shared
                        .lock()
                        .merge(&PerftReport::from_levels(&levels, completed));
                });
            }
        });
        shared.into_inner()
    };

    crate::log_at!(
        info,
        "perft finished: {} nodes at depth {}, completed: {}",
        report.depth(max_depth).map_or(0, |c| c.nodes),
        max_depth,
        report.completed
    );
    report
}

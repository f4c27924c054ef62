//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts and per-depth statistics for move generation
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;

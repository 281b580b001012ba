//! Reconstruction of sequence histories.
//!
//! A history is built in three steps:
//! 1. [HistoryBuilder] greedily merges the closest sequences into a binary
//!    [HistoryTree](crate::model::HistoryTree), driven by a
//!    [DistanceMatrix] of alignment scores.
//! 2. [`HistoryTree::reconstruct_ancestors`](crate::model::HistoryTree::reconstruct_ancestors)
//!    samples an ancestral sequence for every internal vertex, bottom-up.
//! 3. [`HistoryTree::history_cost`](crate::model::HistoryTree::history_cost)
//!    sums the alignment scores between siblings.
//!
//! Randomness is never drawn from global state: all sampling goes through an
//! explicitly passed random source, so a fixed seed reproduces a history.

mod ancestors;
pub mod builder;
pub mod consensus;
mod cost;
pub mod distance_matrix;

pub use builder::{DEFAULT_MAX_SEQUENCE_LENGTH, DEFAULT_MAX_SEQUENCES, HistoryBuilder};
pub use consensus::{consensus_of, sample_consensus};
pub use distance_matrix::{ClosestPair, DistanceMatrix};

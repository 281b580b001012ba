//! Ancestree reconstructs plausible evolutionary histories of sequences.
//!
//! Given a set of sequences, this crate
//! - computes pairwise global alignments (Needleman–Wunsch edit cost),
//! - greedily merges the closest sequences into a rooted binary tree whose
//!   leaves are the input sequences, and
//! - infers an ancestral sequence for every internal vertex by sampling
//!   from the alignment of its two children.
//!
//! Core functionality provided:
//! - Alignment: [align()] and [align_score()] with configurable
//!   [AlignmentParams]. See [crate::align].
//! - Reconstruction: [HistoryBuilder] for configured runs (penalties, seed,
//!   input bounds), or the quick API [build_history()]. See [crate::history].
//! - Tree model: [HistoryTree] using the arena pattern, with in-, pre- and
//!   post-order iterators. See [crate::model].
//! - Output: Newick strings via [crate::newick], and a plain text rendering
//!   through `Display`.
//!
//! Limitations:
//! - The topology is greedy, not optimal; no likelihood model, branch
//!   lengths or bootstrapping
//! - Ancestral sequences are one random sample, not a unique answer
//!
//! # Example
//! ```
//! use ancestree::build_history;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let mut tree = build_history(["ACGT", "ACCT", "AGGT"], &mut rng)?;
//! tree.reconstruct_ancestors(&mut rng);
//!
//! assert_eq!(tree.num_internal(), 2);
//! println!("{tree}");
//! println!("cost: {}", tree.history_cost()?);
//! # Ok::<(), ancestree::HistoryError>(())
//! ```

pub mod align;
pub mod error;
pub mod history;
pub mod model;
pub mod newick;

pub use align::{Alignment, AlignmentParams, align, align_score};
pub use error::HistoryError;
pub use history::HistoryBuilder;
pub use model::{HistoryTree, Sequence, Vertex, VertexIndex};

use rand::Rng;

// ============================================================================
// Quick API
// ============================================================================
/// Reconstructs a history of `sequences` with default alignment penalties.
///
/// See [`HistoryBuilder::build_with_rng`] for full documentation.
pub fn build_history<I, S, R>(sequences: I, rng: &mut R) -> Result<HistoryTree, HistoryError>
where
    I: IntoIterator<Item = S>,
    S: Into<Sequence>,
    R: Rng + ?Sized,
{
    HistoryBuilder::new().build_with_rng(sequences, rng)
}

/// Reconstructs a history of `sequences` with the given alignment penalties.
pub fn build_history_with_params<I, S, R>(
    sequences: I,
    params: AlignmentParams,
    rng: &mut R,
) -> Result<HistoryTree, HistoryError>
where
    I: IntoIterator<Item = S>,
    S: Into<Sequence>,
    R: Rng + ?Sized,
{
    HistoryBuilder::new()
        .with_params(params)
        .build_with_rng(sequences, rng)
}

//! Global pairwise alignment of sequences.
//!
//! Implements the Needleman–Wunsch algorithm with a linear gap penalty and a
//! uniform substitution penalty. The score is an edit cost: lower is closer,
//! identical sequences score `0`.
//!
//! # API
//! * [`align`] - score and one optimal alignment
//! * [`align_score`] - score only, in linear memory
//!
//! # Example
//! ```
//! use ancestree::align::{align, AlignmentParams};
//!
//! let alignment = align("ACGT", "AGT", &AlignmentParams::default());
//! assert_eq!(alignment.score(), 1);
//! assert_eq!(alignment.first().to_string(), "ACGT");
//! assert_eq!(alignment.second().to_string(), "A-GT");
//! ```

mod needleman_wunsch;

pub use needleman_wunsch::{align, align_score};

use crate::model::AlignedSequence;

/// Default cost of one gap column.
pub const DEFAULT_GAP_PENALTY: usize = 1;

/// Default cost of aligning two different symbols.
pub const DEFAULT_SUBSTITUTION_PENALTY: usize = 1;

// =#========================================================================#=
// ALIGNMENT PARAMETERS
// =#========================================================================#=
/// Penalties of the edit-cost model.
///
/// Scores saturate at `usize::MAX`, so very large penalties never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentParams {
    /// Cost of aligning a symbol against a gap
    pub gap_penalty: usize,
    /// Cost of aligning two different symbols
    pub substitution_penalty: usize,
}

impl AlignmentParams {
    /// Creates parameters with the given gap and substitution penalties.
    pub fn new(gap_penalty: usize, substitution_penalty: usize) -> Self {
        AlignmentParams {
            gap_penalty,
            substitution_penalty,
        }
    }

    /// Returns the penalty for aligning symbol `a` against symbol `b`.
    #[inline]
    pub(crate) fn substitution(&self, a: u8, b: u8) -> usize {
        if a == b { 0 } else { self.substitution_penalty }
    }
}

impl Default for AlignmentParams {
    fn default() -> Self {
        AlignmentParams::new(DEFAULT_GAP_PENALTY, DEFAULT_SUBSTITUTION_PENALTY)
    }
}

// =#========================================================================#=
// ALIGNMENT
// =#========================================================================#=
/// Result of a global alignment: the minimal edit cost and one alignment
/// achieving it.
///
/// Both rows have the same length; removing the gaps of a row yields the
/// corresponding input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    score: usize,
    first: AlignedSequence,
    second: AlignedSequence,
}

impl Alignment {
    /// Returns the edit cost of this alignment.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the aligned row of the first sequence.
    pub fn first(&self) -> &AlignedSequence {
        &self.first
    }

    /// Returns the aligned row of the second sequence.
    pub fn second(&self) -> &AlignedSequence {
        &self.second
    }

    /// Returns both aligned rows.
    pub fn aligned(&self) -> (&AlignedSequence, &AlignedSequence) {
        (&self.first, &self.second)
    }

    /// Returns the number of alignment columns.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Returns `true` if the alignment has no columns (both inputs empty).
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Iterates over the columns as pairs of (first, second) entries.
    pub fn columns(&self) -> impl Iterator<Item = (Option<u8>, Option<u8>)> + '_ {
        self.first
            .columns()
            .iter()
            .copied()
            .zip(self.second.columns().iter().copied())
    }
}

//! Sampling of an ancestral sequence from a pairwise alignment.

use crate::align::{Alignment, AlignmentParams, align};
use crate::model::Sequence;
use rand::Rng;

/// Samples one ancestral sequence from an alignment of two sequences.
///
/// For every column, one of the two rows is chosen uniformly at random and
/// its entry kept; gaps are dropped from the result. Exactly one random draw
/// is made per column, so a seeded source reproduces the same sequence.
pub fn sample_consensus<R: Rng + ?Sized>(alignment: &Alignment, rng: &mut R) -> Sequence {
    let mut symbols = Vec::with_capacity(alignment.len());
    for (first, second) in alignment.columns() {
        let chosen = if rng.random_bool(0.5) { first } else { second };
        if let Some(symbol) = chosen {
            symbols.push(symbol);
        }
    }
    Sequence::new(symbols)
}

/// Aligns `a` and `b` and samples an ancestral sequence from the alignment.
pub fn consensus_of<R: Rng + ?Sized>(
    a: &Sequence,
    b: &Sequence,
    params: &AlignmentParams,
    rng: &mut R,
) -> Sequence {
    let alignment = align(a, b, params);
    sample_consensus(&alignment, rng)
}

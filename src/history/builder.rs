//! Greedy agglomerative reconstruction of a history tree.

use crate::align::{AlignmentParams, align, align_score};
use crate::error::HistoryError;
use crate::history::consensus::sample_consensus;
use crate::history::distance_matrix::DistanceMatrix;
use crate::model::{HistoryTree, Sequence};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Default bound on the number of input sequences.
pub const DEFAULT_MAX_SEQUENCES: usize = 10_000;

/// Default bound on the length of each input sequence.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 100_000;

// =#========================================================================#=
// HISTORY BUILDER
// =#========================================================================#=
/// Builder for configuring and running a history reconstruction.
///
/// Reconstruction is agglomerative: every sequence starts as its own active
/// vertex, and the two active vertices at minimal alignment distance are
/// repeatedly merged under a new internal vertex until one vertex, the root,
/// remains. The merged vertex gets a provisional ancestral sequence sampled
/// from the alignment of its children (see
/// [sample_consensus](crate::history::sample_consensus)), which is used for
/// all further distances. Distances are raw alignment scores, not weighted by
/// cluster size.
///
/// Ties are broken by scan order: earlier rows first, and within a row
/// earlier columns first, where rows/columns are the active vertices in the
/// order they became active. The later vertex of the merged pair becomes the
/// left child.
///
/// # Example
/// ```
/// use ancestree::history::HistoryBuilder;
///
/// let tree = HistoryBuilder::new()
///     .with_seed(42)
///     .build(["ACGT", "ACCT", "AGGT"])?;
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.num_internal(), 2);
/// # Ok::<(), ancestree::HistoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    params: AlignmentParams,
    seed: Option<u64>,
    max_sequences: usize,
    max_sequence_length: usize,
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuilder {
    /// Creates a builder with default penalties, no seed and default bounds.
    pub fn new() -> Self {
        HistoryBuilder {
            params: AlignmentParams::default(),
            seed: None,
            max_sequences: DEFAULT_MAX_SEQUENCES,
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
        }
    }

    /// Sets both alignment penalties.
    pub fn with_params(mut self, params: AlignmentParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the penalty of a gap column.
    pub fn with_gap_penalty(mut self, gap_penalty: usize) -> Self {
        self.params.gap_penalty = gap_penalty;
        self
    }

    /// Sets the penalty of aligning two different symbols.
    pub fn with_substitution_penalty(mut self, substitution_penalty: usize) -> Self {
        self.params.substitution_penalty = substitution_penalty;
        self
    }

    /// Seeds the random source used by [`build`](Self::build), making the
    /// provisional ancestral sequences reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the maximal number of input sequences.
    pub fn with_max_sequences(mut self, max_sequences: usize) -> Self {
        self.max_sequences = max_sequences;
        self
    }

    /// Sets the maximal length of each input sequence.
    pub fn with_max_sequence_length(mut self, max_sequence_length: usize) -> Self {
        self.max_sequence_length = max_sequence_length;
        self
    }

    /// Returns the configured alignment penalties.
    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    /// Creates the random source for [`build`](Self::build): seeded if a seed
    /// was configured, from entropy otherwise.
    pub fn rng(&self) -> Xoshiro256PlusPlus {
        match self.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// Reconstructs a history of `sequences` with this builder's random source.
    ///
    /// # Errors
    /// * [HistoryError::EmptyInput] if there are no sequences
    /// * [HistoryError::TooManySequences], [HistoryError::SequenceTooLong]
    ///   if the input exceeds the configured bounds
    pub fn build<I, S>(&self, sequences: I) -> Result<HistoryTree, HistoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sequence>,
    {
        let mut rng = self.rng();
        self.build_with_rng(sequences, &mut rng)
    }

    /// Reconstructs a history of `sequences`, drawing randomness from `rng`.
    ///
    /// See [`build`](Self::build) for errors.
    pub fn build_with_rng<I, S, R>(
        &self,
        sequences: I,
        rng: &mut R,
    ) -> Result<HistoryTree, HistoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sequence>,
        R: Rng + ?Sized,
    {
        let sequences: Vec<Sequence> = sequences.into_iter().map(Into::into).collect();
        self.check_bounds(&sequences)?;

        let params = self.params;
        let num_sequences = sequences.len();
        let mut tree = HistoryTree::new(num_sequences, params);
        let mut matrix = DistanceMatrix::with_capacity(num_sequences);
        // Working label of every vertex, indexed like the tree arena
        let mut labels: Vec<Sequence> = Vec::with_capacity(2 * num_sequences - 1);

        for sequence in sequences {
            let leaf = tree.add_leaf(sequence.clone());
            labels.push(sequence);
            matrix.insert(leaf, |other| align_score(&labels[leaf], &labels[other], &params));
        }

        while let Some(pair) = matrix.closest_pair() {
            let alignment = align(&labels[pair.row], &labels[pair.column], &params);
            let consensus = sample_consensus(&alignment, rng);

            let merged = tree.add_internal((pair.row, pair.column))?;
            debug!(
                "Merged vertices {} and {} at distance {} into {}",
                pair.row, pair.column, pair.distance, merged
            );
            tree.set_ancestral_label(merged, consensus.clone());
            labels.push(consensus);

            matrix.remove(pair.row);
            matrix.remove(pair.column);
            matrix.insert(merged, |other| {
                align_score(&labels[merged], &labels[other], &params)
            });
        }

        let root = matrix
            .active()
            .first()
            .copied()
            .ok_or(HistoryError::EmptyInput)?;
        tree.set_root(root)?;

        info!(
            "Reconstructed history of {} sequences ({} internal vertices)",
            num_sequences,
            tree.num_internal()
        );
        Ok(tree)
    }

    fn check_bounds(&self, sequences: &[Sequence]) -> Result<(), HistoryError> {
        if sequences.is_empty() {
            return Err(HistoryError::EmptyInput);
        }
        if sequences.len() > self.max_sequences {
            return Err(HistoryError::TooManySequences {
                count: sequences.len(),
                max: self.max_sequences,
            });
        }
        if let Some((index, sequence)) = sequences
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() > self.max_sequence_length)
        {
            return Err(HistoryError::SequenceTooLong {
                index,
                len: sequence.len(),
                max: self.max_sequence_length,
            });
        }
        Ok(())
    }
}

//! Error type shared by tree construction, history reconstruction and cost evaluation.

use crate::model::VertexIndex;
use thiserror::Error;

/// Errors that can occur while building or evaluating a sequence history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Reconstruction was asked for a history of zero sequences.
    #[error("Cannot reconstruct a history from an empty set of sequences")]
    EmptyInput,

    /// More sequences than the configured bound.
    #[error("Too many sequences: {count} (maximum is {max})")]
    TooManySequences { count: usize, max: usize },

    /// A sequence longer than the configured bound.
    #[error("Sequence {index} has length {len} (maximum is {max})")]
    SequenceTooLong { index: usize, len: usize, max: usize },

    /// An internal vertex was given a child that cannot be attached.
    #[error("Invalid child vertex {child}: {reason}")]
    InvalidChild {
        child: VertexIndex,
        reason: &'static str,
    },

    /// A vertex that cannot serve as root.
    #[error("Vertex {vertex} cannot be the root: {reason}")]
    InvalidRoot {
        vertex: VertexIndex,
        reason: &'static str,
    },

    /// The tree has no root yet, so it is not a complete history.
    #[error("Tree has no root; history is incomplete")]
    RootNotSet,

    /// Child selector other than `L` or `R`.
    #[error("Unknown child side '{0}' (expected 'L' or 'R')")]
    UnknownChildSide(char),

    /// A label needed for cost evaluation is absent.
    #[error("Vertex {vertex} has no label; history cost unavailable")]
    MissingLabel { vertex: VertexIndex },
}

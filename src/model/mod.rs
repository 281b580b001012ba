//! Data model for sequence histories.
//!
//! # Tree representation
//! A history is a [HistoryTree], which uses the arena pattern to store
//! [Vertex] nodes. Each vertex is either a `Leaf` holding an input
//! [Sequence] or an `Internal` vertex with two children and an ancestral
//! sequence, referenced by [VertexIndex].
//!
//! # Sequences
//! [Sequence] is an immutable symbol string. Pairwise alignments produce
//! [AlignedSequence] rows in which gaps are explicit `None` columns.

pub mod sequence;
pub mod tree;
pub mod vertex;

pub use sequence::{AlignedSequence, GAP_SYMBOL, Sequence};
pub use tree::{HistoryTree, InOrderIter, PostOrderIter, PreOrderIter, VertexIndex};
pub use vertex::{ChildSide, Vertex};

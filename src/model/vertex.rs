//! Vertex module for sequence history trees.

use crate::error::HistoryError;
use crate::model::sequence::Sequence;
use crate::model::tree::VertexIndex;
use std::str::FromStr;

/// During construction, vertices might not have a parent set yet.
/// The root keeps this value.
const NO_PARENT_SET: VertexIndex = usize::MAX;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a sequence history tree.
///
/// A vertex can be either:
/// - **Leaf**: Has no children, holds one input sequence as its fixed label
/// - **Internal**: Has exactly two children and a hypothesized ancestral
///   label, which is absent until set by reconstruction
///
/// The root is whichever vertex has no parent: a leaf for a single-sequence
/// history, an internal vertex otherwise.
///
/// # Invariants
/// - `index` is the position of the vertex in the tree arena
/// - `parent` is `NO_PARENT_SET` only for the root or during construction
/// - Leaf labels are set once at construction and never change
#[derive(PartialEq, Debug, Clone)]
pub enum Vertex {
    /// Internal vertex (two children, optional ancestral label)
    Internal {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Indices of the left and right child vertices
        children: (VertexIndex, VertexIndex),
        /// Hypothesized ancestral sequence
        label: Option<Sequence>,
    },
    /// Leaf vertex (input sequence, no children)
    Leaf {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Input sequence
        label: Sequence,
    },
}

impl Vertex {
    /// Creates a new internal vertex without label.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `children` - Tuple of (left, right) child indices
    pub fn new_internal(index: VertexIndex, children: (VertexIndex, VertexIndex)) -> Self {
        Vertex::Internal {
            index,
            parent: NO_PARENT_SET,
            children,
            label: None,
        }
    }

    /// Creates a new leaf vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `label` - The input sequence of this leaf
    pub fn new_leaf(index: VertexIndex, label: Sequence) -> Self {
        Vertex::Leaf {
            index,
            parent: NO_PARENT_SET,
            label,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        match self {
            Vertex::Internal { index, .. } | Vertex::Leaf { index, .. } => *index,
        }
    }

    /// Returns `true` if this vertex is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Vertex::Leaf { .. })
    }

    /// Returns `true` if this vertex is an internal vertex.
    pub fn is_internal(&self) -> bool {
        matches!(self, Vertex::Internal { .. })
    }

    /// Returns the label, which is always present for a leaf and present
    /// for an internal vertex only once an ancestral label has been set.
    pub fn label(&self) -> Option<&Sequence> {
        match self {
            Vertex::Internal { label, .. } => label.as_ref(),
            Vertex::Leaf { label, .. } => Some(label),
        }
    }

    /// Returns `true` if a label is present.
    pub fn has_label(&self) -> bool {
        self.label().is_some()
    }

    /// Returns the (left, right) children if this is an internal vertex, else `None`.
    pub fn children(&self) -> Option<(VertexIndex, VertexIndex)> {
        match self {
            Vertex::Internal { children, .. } => Some(*children),
            Vertex::Leaf { .. } => None,
        }
    }

    /// Returns the child on the given side, or `None` for a leaf.
    pub fn child(&self, side: ChildSide) -> Option<VertexIndex> {
        let (left, right) = self.children()?;
        match side {
            ChildSide::Left => Some(left),
            ChildSide::Right => Some(right),
        }
    }

    /// Returns the index of the parent, or `None` for the root.
    ///
    /// Note that the parent might not be set yet during construction.
    pub fn parent_index(&self) -> Option<VertexIndex> {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => {
                if *parent == NO_PARENT_SET {
                    None
                } else {
                    Some(*parent)
                }
            }
        }
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent_index().is_some()
    }

    pub(crate) fn set_parent(&mut self, parent: VertexIndex) {
        match self {
            Vertex::Internal { parent: p, .. } | Vertex::Leaf { parent: p, .. } => *p = parent,
        }
    }

    /// Sets the ancestral label of an internal vertex; leaves keep theirs.
    ///
    /// # Returns
    /// `true` if the label was set, `false` if this is a leaf.
    pub(crate) fn set_ancestral_label(&mut self, sequence: Option<Sequence>) -> bool {
        match self {
            Vertex::Internal { label, .. } => {
                *label = sequence;
                true
            }
            Vertex::Leaf { .. } => false,
        }
    }
}

// =#========================================================================#=
// CHILD SIDE
// =#========================================================================#=
/// Selects one of the two children of an internal vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSide {
    Left,
    Right,
}

impl TryFrom<char> for ChildSide {
    type Error = HistoryError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' | 'l' => Ok(ChildSide::Left),
            'R' | 'r' => Ok(ChildSide::Right),
            other => Err(HistoryError::UnknownChildSide(other)),
        }
    }
}

impl FromStr for ChildSide {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ChildSide::try_from(c),
            (Some(c), Some(_)) => Err(HistoryError::UnknownChildSide(c)),
            (None, _) => Err(HistoryError::UnknownChildSide(' ')),
        }
    }
}

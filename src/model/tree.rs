//! Provides the tree representation of a sequence history.
//!
//! * [HistoryTree] - Binary tree using the arena pattern, with input
//!   sequences at the leaves and ancestral sequences at internal vertices
//! * [VertexIndex] as type used to index vertices in tree
//! * [InOrderIter], [PreOrderIter], [PostOrderIter] for traversal

use crate::align::AlignmentParams;
use crate::error::HistoryError;
use crate::model::sequence::Sequence;
use crate::model::vertex::Vertex;
use std::fmt;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: VertexIndex = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted binary tree over a set of sequences, represented using the
/// arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Indices are stable: vertices are only ever appended, so an
/// index keeps identifying the same vertex for the lifetime of the tree.
///
/// # Structure
/// - Leaves hold the input sequences; internal vertices hold ancestral
///   sequences once reconstructed.
/// - Every internal vertex has exactly two children and each vertex has at
///   most one parent, so a tree with `n` leaves has `n - 1` internal vertices.
/// - The [AlignmentParams] the history was built with are kept, so that
///   ancestor reconstruction and cost evaluation align the same way.
///
/// # Construction
/// Usually built by [HistoryBuilder](crate::history::HistoryBuilder).
/// Manual construction is bottom-up: add leaves, then internal vertices over
/// already added vertices, then set the root.
/// Test validity with [`HistoryTree::is_valid()`].
#[derive(Debug, Clone)]
pub struct HistoryTree {
    /// Number of leaves the tree was initialized to hold
    num_leaves_init: usize,

    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree
    root_index: VertexIndex,

    /// Penalties used for all alignments on this tree
    params: AlignmentParams,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl HistoryTree {
    /// Creates a new tree with capacity for a binary tree with `num_leaves` leaves.
    ///
    /// # Arguments
    /// * `num_leaves` - number of leaves of the new binary tree; must be positive
    /// * `params` - penalties used when aligning vertex labels
    ///
    /// # Panics
    /// Panics if `num_leaves` is zero.
    pub fn new(num_leaves: usize, params: AlignmentParams) -> Self {
        assert!(num_leaves > 0);
        let capacity = 2 * num_leaves - 1;
        HistoryTree {
            num_leaves_init: num_leaves,
            vertices: Vec::with_capacity(capacity),
            root_index: NO_ROOT_SET_INDEX,
            params,
        }
    }

    /// Adds a leaf holding `label` to the tree, returning its index.
    pub fn add_leaf(&mut self, label: Sequence) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new_leaf(index, label));
        index
    }

    /// Adds an internal vertex over two existing vertices, returning its index.
    ///
    /// # Arguments
    /// * `children` - Tuple of (left, right) child indices
    ///
    /// # Errors
    /// [HistoryError::InvalidChild] if a child does not exist, already has a
    /// parent, or both children are the same vertex. The tree is unchanged
    /// in that case.
    pub fn add_internal(
        &mut self,
        children: (VertexIndex, VertexIndex),
    ) -> Result<VertexIndex, HistoryError> {
        let (left, right) = children;
        if left == right {
            return Err(HistoryError::InvalidChild {
                child: right,
                reason: "both children are the same vertex",
            });
        }
        for child in [left, right] {
            match self.vertices.get(child) {
                None => {
                    return Err(HistoryError::InvalidChild {
                        child,
                        reason: "no such vertex",
                    });
                }
                Some(vertex) if vertex.has_parent() || child == self.root_index => {
                    return Err(HistoryError::InvalidChild {
                        child,
                        reason: "already attached to a parent",
                    });
                }
                Some(_) => {}
            }
        }

        let index = self.vertices.len();
        self.vertices.push(Vertex::new_internal(index, children));
        self.vertices[left].set_parent(index);
        self.vertices[right].set_parent(index);

        Ok(index)
    }

    /// Declares the vertex at `index` to be the root.
    ///
    /// # Errors
    /// [HistoryError::InvalidRoot] if the vertex does not exist or has a parent.
    pub fn set_root(&mut self, index: VertexIndex) -> Result<(), HistoryError> {
        match self.vertices.get(index) {
            None => Err(HistoryError::InvalidRoot {
                vertex: index,
                reason: "no such vertex",
            }),
            Some(vertex) if vertex.has_parent() => Err(HistoryError::InvalidRoot {
                vertex: index,
                reason: "vertex has a parent",
            }),
            Some(_) => {
                self.root_index = index;
                Ok(())
            }
        }
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully constructed yet.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns the alignment penalties used on this tree.
    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    /// Returns the number of leaves this tree was initialized to hold.
    ///
    /// This represents the capacity, not necessarily the current count of leaf vertices.
    pub fn num_leaves_init(&self) -> usize {
        self.num_leaves_init
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree.
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the sequences at the leaves, in arena order.
    pub fn leaves(&self) -> Vec<&Sequence> {
        self.vertices
            .iter()
            .filter(|v| v.is_leaf())
            .filter_map(|v| v.label())
            .collect()
    }

    /// Returns the number of edges on a longest root-to-leaf path.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn height(&self) -> usize {
        let mut heights = vec![0; self.num_vertices()];
        for vertex in self.post_order_iter() {
            if let Some((left, right)) = vertex.children() {
                heights[vertex.index()] = 1 + heights[left].max(heights[right]);
            }
        }
        heights[self.root_index]
    }

    /// Removes all ancestral labels, leaving leaf labels untouched.
    pub fn clear_ancestral_labels(&mut self) {
        for vertex in &mut self.vertices {
            vertex.set_ancestral_label(None);
        }
    }

    /// Sets the ancestral label of the internal vertex at `index`.
    pub(crate) fn set_ancestral_label(&mut self, index: VertexIndex, label: Sequence) {
        self.vertices[index].set_ancestral_label(Some(label));
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and the root has no parent
    /// - All vertex indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All non-root vertices have a parent that lists them as child
    /// - Every vertex is reachable from the root
    /// - Leaf/internal counts satisfy the full binary tree invariant
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index >= self.vertices.len() || self.root().has_parent() {
            return false;
        }

        let mut leaf_count = 0;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }

            if vertex.is_leaf() {
                leaf_count += 1;
            }

            if let Some((left, right)) = vertex.children() {
                if left >= self.vertices.len() || right >= self.vertices.len() {
                    return false;
                }
                if self.vertices[left].parent_index() != Some(index)
                    || self.vertices[right].parent_index() != Some(index)
                {
                    return false;
                }
            }

            if index != self.root_index {
                match vertex.parent_index() {
                    None => return false,
                    Some(parent) if parent >= self.vertices.len() => return false,
                    Some(parent) => match self.vertices[parent].children() {
                        Some((left, right)) if left == index || right == index => {}
                        _ => return false,
                    },
                }
            }
        }

        // for n leaves, there are 2n-1 vertices
        let expected_leaf_count = self.vertices.len().div_ceil(2);
        if leaf_count != expected_leaf_count {
            return false;
        }

        self.in_order_iter().count() == self.vertices.len()
    }
}

impl std::ops::Index<VertexIndex> for HistoryTree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// ============================================================================
// Printing
// ============================================================================
/// Renders the tree with one vertex per line, for example:
/// ```text
/// History with 3 leaves (5 vertices total):
/// [4] Internal "ACGT"
///   ├─ [3] Internal "ACGT"
///   │   ├─ [0] Leaf "ACGT"
///   │   └─ [1] Leaf "ACCT"
///   └─ [2] Leaf "AGGT"
/// ```
impl fmt::Display for HistoryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "History with {} leaves ({} vertices total):",
            self.num_leaves(),
            self.vertices.len()
        )?;

        if self.is_root_set() {
            self.fmt_vertex(f, self.root_index, "", true)
        } else {
            writeln!(f, "(No root set)")
        }
    }
}

impl HistoryTree {
    /// Helper function to recursively print a vertex and its children.
    fn fmt_vertex(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: VertexIndex,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let vertex = &self.vertices[index];

        let connector = if prefix.is_empty() {
            ""
        } else if is_last {
            "└─ "
        } else {
            "├─ "
        };
        let kind = if vertex.is_leaf() { "Leaf" } else { "Internal" };
        match vertex.label() {
            Some(label) => writeln!(f, "{prefix}{connector}[{index}] {kind} \"{label}\"")?,
            None => writeln!(f, "{prefix}{connector}[{index}] {kind} (no label)")?,
        }

        if let Some((left, right)) = vertex.children() {
            let new_prefix = if prefix.is_empty() {
                "  ".to_string()
            } else {
                format!("{}{}   ", prefix, if is_last { " " } else { "│" })
            };

            self.fmt_vertex(f, left, &new_prefix, false)?;
            self.fmt_vertex(f, right, &new_prefix, true)?;
        }

        Ok(())
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl HistoryTree {
    /// Returns an iterator over the tree in in-order (left subtree, vertex,
    /// right subtree).
    ///
    /// The order is stable for a given tree; each call starts a fresh traversal.
    pub fn in_order_iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self, self.is_root_set().then_some(self.root_index))
    }

    /// Returns an in-order iterator over the subtree rooted at `index`.
    pub fn subtree_in_order_iter(&self, index: VertexIndex) -> InOrderIter<'_> {
        InOrderIter::new(self, Some(index))
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

impl<'a> IntoIterator for &'a HistoryTree {
    type Item = &'a Vertex;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_iter()
    }
}

/// Iterator for in-order traversal (left subtree, vertex, right subtree).
///
/// Stack-based, so deep (caterpillar-like) histories do not recurse.
pub struct InOrderIter<'a> {
    tree: &'a HistoryTree,
    stack: Vec<VertexIndex>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a HistoryTree, start: Option<VertexIndex>) -> Self {
        let mut iter = InOrderIter {
            tree,
            stack: Vec::new(),
        };
        if let Some(index) = start {
            iter.push_left_spine(index);
        }
        iter
    }

    fn push_left_spine(&mut self, mut index: VertexIndex) {
        loop {
            self.stack.push(index);
            match self.tree[index].children() {
                Some((left, _)) => index = left,
                None => break,
            }
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];
        if let Some((_, right)) = vertex.children() {
            self.push_left_spine(right);
        }
        Some(vertex)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a HistoryTree,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a HistoryTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_leaf() {
                return Some(vertex);
            }

            self.stack.push((index, true));

            // Push children (right first, so left is processed first)
            if let Some((left, right)) = vertex.children() {
                self.stack.push((right, false));
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
pub struct PreOrderIter<'a> {
    tree: &'a HistoryTree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a HistoryTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        if let Some((left, right)) = vertex.children() {
            self.stack.push(right);
            self.stack.push(left);
        }

        Some(vertex)
    }
}

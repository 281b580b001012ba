//! Symmetric distance matrix over the active vertices of a reconstruction.

use crate::model::VertexIndex;
use log::trace;
use std::collections::HashMap;

/// Closest pair found by [DistanceMatrix::closest_pair].
///
/// `row` is the vertex that became active later, `column` the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestPair {
    pub row: VertexIndex,
    pub column: VertexIndex,
    pub distance: usize,
}

/// Pairwise distances between active vertices, keyed by [VertexIndex].
///
/// Vertices are kept in activation order, which is the scan order used to
/// break ties: rows in activation order, and within a row the columns of all
/// earlier vertices in activation order. Removing a vertex never changes the
/// relative order of the remaining ones, and an inserted vertex always
/// becomes the last row. A vertex is never paired with itself.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    /// Active vertices in activation order
    active: Vec<VertexIndex>,

    /// Distances keyed by (smaller index, larger index)
    distances: HashMap<(VertexIndex, VertexIndex), usize>,
}

impl DistanceMatrix {
    /// Creates an empty matrix with room for `num_vertices` active vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        DistanceMatrix {
            active: Vec::with_capacity(num_vertices),
            distances: HashMap::with_capacity(num_vertices * num_vertices.saturating_sub(1) / 2),
        }
    }

    /// Returns the number of active vertices.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no vertex is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the active vertices in activation order.
    pub fn active(&self) -> &[VertexIndex] {
        &self.active
    }

    /// Returns whether `vertex` is active.
    pub fn contains(&self, vertex: VertexIndex) -> bool {
        self.active.contains(&vertex)
    }

    /// Activates `vertex` as the new last row.
    ///
    /// `distance_to` is called once for every currently active vertex, in
    /// activation order. Inserting an already active vertex does nothing.
    pub fn insert<F>(&mut self, vertex: VertexIndex, mut distance_to: F)
    where
        F: FnMut(VertexIndex) -> usize,
    {
        if self.contains(vertex) {
            return;
        }

        for &other in &self.active {
            let distance = distance_to(other);
            trace!("d({vertex}, {other}) = {distance}");
            self.distances.insert(key(vertex, other), distance);
        }
        self.active.push(vertex);
    }

    /// Deactivates `vertex`, dropping its row and column.
    ///
    /// # Returns
    /// `true` if the vertex was active.
    pub fn remove(&mut self, vertex: VertexIndex) -> bool {
        let Some(position) = self.active.iter().position(|&v| v == vertex) else {
            return false;
        };
        self.active.remove(position);
        self.distances
            .retain(|&(a, b), _| a != vertex && b != vertex);
        true
    }

    /// Returns the distance between two distinct active vertices.
    pub fn distance(&self, a: VertexIndex, b: VertexIndex) -> Option<usize> {
        if a == b {
            return None;
        }
        self.distances.get(&key(a, b)).copied()
    }

    /// Returns the pair at minimal distance, the first one in scan order on ties,
    /// or `None` with fewer than two active vertices.
    pub fn closest_pair(&self) -> Option<ClosestPair> {
        let mut best: Option<ClosestPair> = None;
        for (position, &row) in self.active.iter().enumerate() {
            for &column in &self.active[..position] {
                let Some(distance) = self.distance(row, column) else {
                    continue;
                };
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(ClosestPair {
                        row,
                        column,
                        distance,
                    });
                }
            }
        }
        best
    }
}

fn key(a: VertexIndex, b: VertexIndex) -> (VertexIndex, VertexIndex) {
    if a < b { (a, b) } else { (b, a) }
}

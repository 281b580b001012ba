//! Total cost of a history.

use crate::align::align_score;
use crate::error::HistoryError;
use crate::model::HistoryTree;

impl HistoryTree {
    /// Returns the sum, over all internal vertices, of the alignment score
    /// between the labels of its two children.
    ///
    /// A single-leaf history costs `0`.
    ///
    /// # Errors
    /// [HistoryError::MissingLabel] if some child of an internal vertex has no
    /// label, e.g. after [`clear_ancestral_labels`](Self::clear_ancestral_labels).
    /// No partial sum is returned in that case.
    /// [HistoryError::RootNotSet] if the tree is still under construction.
    pub fn history_cost(&self) -> Result<usize, HistoryError> {
        if !self.is_root_set() {
            return Err(HistoryError::RootNotSet);
        }
        let params = self.params();
        let mut cost = 0;
        for vertex in self.in_order_iter() {
            let Some((left, right)) = vertex.children() else {
                continue;
            };
            let left_label = self[left]
                .label()
                .ok_or(HistoryError::MissingLabel { vertex: left })?;
            let right_label = self[right]
                .label()
                .ok_or(HistoryError::MissingLabel { vertex: right })?;
            cost = align_score(left_label, right_label, params).saturating_add(cost);
        }
        Ok(cost)
    }
}

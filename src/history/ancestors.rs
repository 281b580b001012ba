//! Post-order inference of ancestral sequences.

use crate::align::align;
use crate::history::consensus::sample_consensus;
use crate::model::{HistoryTree, VertexIndex};
use log::{info, warn};
use rand::Rng;

impl HistoryTree {
    /// Infers an ancestral sequence for every internal vertex.
    ///
    /// Vertices are visited in post-order, so both children carry their final
    /// labels when a vertex is processed. The children's labels are aligned
    /// and a sequence is sampled column by column (see
    /// [sample_consensus](crate::history::sample_consensus)). Any previous
    /// ancestral label, such as the provisional one from reconstruction, is
    /// overwritten; leaf labels are never touched.
    ///
    /// Re-running yields the same topology but, in general, different
    /// ancestral sequences. With identically seeded random sources, two
    /// structurally identical trees receive identical labels.
    pub fn reconstruct_ancestors<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let internal: Vec<(VertexIndex, (VertexIndex, VertexIndex))> = self
            .post_order_iter()
            .filter_map(|v| v.children().map(|children| (v.index(), children)))
            .collect();

        let params = *self.params();
        for &(index, (left, right)) in &internal {
            let (Some(left_label), Some(right_label)) = (self[left].label(), self[right].label())
            else {
                warn!("Skipping vertex {index}: child without label");
                continue;
            };
            let alignment = align(left_label, right_label, &params);
            let ancestor = sample_consensus(&alignment, rng);
            self.set_ancestral_label(index, ancestor);
        }

        info!("Reconstructed {} ancestral sequences", internal.len());
    }
}

//! Needleman–Wunsch matrix fill and traceback.

use crate::align::{Alignment, AlignmentParams};
use crate::model::AlignedSequence;

/// Cost matrix `F` of size `(m + 1) x (n + 1)`, stored row-major.
struct CostMatrix {
    data: Vec<usize>,
    cols: usize,
}

impl CostMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        CostMatrix {
            data: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.data[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.data[row * self.cols + col] = value;
    }
}

/// Computes the edit cost and one optimal global alignment of `a` and `b`.
///
/// Among equally optimal alignments, the traceback prefers a diagonal step
/// (match/substitution), then a step consuming only `a` (gap in `b`), then a
/// step consuming only `b` (gap in `a`). Runs in `O(m * n)` time and memory.
///
/// # Arguments
/// * `a`, `b` - Sequences to align (anything viewable as bytes)
/// * `params` - Gap and substitution penalties
pub fn align<A, B>(a: A, b: B, params: &AlignmentParams) -> Alignment
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();
    let (m, n) = (a.len(), b.len());
    let gap = params.gap_penalty;

    let matrix = fill(a, b, params);
    let score = matrix.get(m, n);

    let mut first = AlignedSequence::with_capacity(m + n);
    let mut second = AlignedSequence::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        let current = matrix.get(i, j);
        if i > 0
            && j > 0
            && current
                == matrix
                    .get(i - 1, j - 1)
                    .saturating_add(params.substitution(a[i - 1], b[j - 1]))
        {
            first.push(Some(a[i - 1]));
            second.push(Some(b[j - 1]));
            i -= 1;
            j -= 1;
        } else if i > 0 && current == matrix.get(i - 1, j).saturating_add(gap) {
            first.push(Some(a[i - 1]));
            second.push(None);
            i -= 1;
        } else {
            first.push(None);
            second.push(Some(b[j - 1]));
            j -= 1;
        }
    }
    first.reverse();
    second.reverse();

    Alignment {
        score,
        first,
        second,
    }
}

/// Computes only the edit cost of aligning `a` and `b`.
///
/// Same value as `align(a, b, params).score()`, but keeps just two matrix
/// rows, so memory is `O(n)`.
pub fn align_score<A, B>(a: A, b: B, params: &AlignmentParams) -> usize
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();
    let gap = params.gap_penalty;

    let mut previous: Vec<usize> = (0..=b.len()).map(|j| gap.saturating_mul(j)).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, &symbol_a) in a.iter().enumerate() {
        current[0] = gap.saturating_mul(i + 1);
        for (j, &symbol_b) in b.iter().enumerate() {
            let diagonal = previous[j].saturating_add(params.substitution(symbol_a, symbol_b));
            let delete = previous[j + 1].saturating_add(gap);
            let insert = current[j].saturating_add(gap);
            current[j + 1] = diagonal.min(delete).min(insert);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Fills the full cost matrix for `a` (rows) against `b` (columns).
///
/// Costs saturate at `usize::MAX`.
fn fill(a: &[u8], b: &[u8], params: &AlignmentParams) -> CostMatrix {
    let (m, n) = (a.len(), b.len());
    let gap = params.gap_penalty;
    let mut matrix = CostMatrix::new(m + 1, n + 1);

    // Prefix against all-gap sequence
    for i in 0..=m {
        matrix.set(i, 0, gap.saturating_mul(i));
    }
    for j in 0..=n {
        matrix.set(0, j, gap.saturating_mul(j));
    }

    for i in 1..=m {
        for j in 1..=n {
            let diagonal = matrix
                .get(i - 1, j - 1)
                .saturating_add(params.substitution(a[i - 1], b[j - 1]));
            let delete = matrix.get(i - 1, j).saturating_add(gap);
            let insert = matrix.get(i, j - 1).saturating_add(gap);
            matrix.set(i, j, diagonal.min(delete).min(insert));
        }
    }

    matrix
}

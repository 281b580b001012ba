//! Sequences and gapped (aligned) sequences.
//!
//! A [Sequence] is an immutable string of symbols. Symbols are plain bytes and
//! compared by equality only, so any alphabet (nucleotides, amino acids, ...)
//! works without declaring it upfront.
//!
//! An [AlignedSequence] is one row of a pairwise alignment. Gaps are
//! represented as `None` columns rather than as a reserved symbol, so input
//! sequences may contain any byte, including [GAP_SYMBOL].

use std::fmt;

/// Symbol used when rendering a gap column.
pub const GAP_SYMBOL: u8 = b'-';

// =#========================================================================#=
// SEQUENCE
// =#========================================================================#=
/// An immutable sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Sequence {
    symbols: Box<[u8]>,
}

impl Sequence {
    /// Creates a sequence from raw symbols.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Sequence {
            symbols: symbols.into().into_boxed_slice(),
        }
    }

    /// Returns the symbols of this sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the sequence has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Sequence::new(value.as_bytes())
    }
}

impl From<String> for Sequence {
    fn from(value: String) -> Self {
        Sequence::new(value.into_bytes())
    }
}

impl From<&[u8]> for Sequence {
    fn from(value: &[u8]) -> Self {
        Sequence::new(value)
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(value: Vec<u8>) -> Self {
        Sequence::new(value)
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.symbols))
    }
}

// =#========================================================================#=
// ALIGNED SEQUENCE
// =#========================================================================#=
/// One row of a pairwise alignment; `None` marks a gap column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedSequence {
    columns: Vec<Option<u8>>,
}

impl AlignedSequence {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        AlignedSequence {
            columns: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, column: Option<u8>) {
        self.columns.push(column);
    }

    pub(crate) fn reverse(&mut self) {
        self.columns.reverse();
    }

    /// Returns the columns of this row.
    pub fn columns(&self) -> &[Option<u8>] {
        &self.columns
    }

    /// Returns the number of columns, gaps included.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the number of gap columns.
    pub fn num_gaps(&self) -> usize {
        self.columns.iter().filter(|c| c.is_none()).count()
    }

    /// Removes all gaps, recovering the underlying sequence.
    pub fn ungapped(&self) -> Sequence {
        Sequence::new(self.columns.iter().flatten().copied().collect::<Vec<u8>>())
    }
}

impl fmt::Display for AlignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<u8> = self
            .columns
            .iter()
            .map(|c| c.unwrap_or(GAP_SYMBOL))
            .collect();
        write!(f, "{}", String::from_utf8_lossy(&rendered))
    }
}

//! Newick output of reconstructed histories.
//!
//! Leaves are named by their input sequence. With [NewickStyle::AllLabels],
//! internal vertices are additionally named by their ancestral sequence:
//! * `tree ::= vertex ';'`
//! * `vertex ::= leaf | '(' vertex ',' vertex ')' [label]`
//!
//! No branch lengths are written; a history has none.

pub mod writer;

pub use writer::{NewickStyle, to_newick, write_newick_file};

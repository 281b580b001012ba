//! Newick format writing for history trees.

use crate::model::{HistoryTree, VertexIndex};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Extra buffer in Newick string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Style for serializing a history to Newick format, controlling which
/// vertices are named in the output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewickStyle {
    /// Name leaves by their sequence; internal vertices stay unnamed
    #[default]
    Leaves,
    /// Additionally name internal vertices by their ancestral sequence, if set
    AllLabels,
}

/// Writes given list of histories to a file in Newick format, one tree per line.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_newick_file(file: File, trees: &[HistoryTree], style: NewickStyle) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        writer.write_all(to_newick(tree, style).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the Newick representation of a history with closing semicolon.
///
/// Labels are the sequences themselves, quoted if they contain characters
/// with a meaning in Newick. Returns an empty string if the root is not set.
///
/// # Example
/// ```
/// use ancestree::align::AlignmentParams;
/// use ancestree::model::HistoryTree;
/// use ancestree::newick::{NewickStyle, to_newick};
///
/// let mut tree = HistoryTree::new(2, AlignmentParams::default());
/// let a = tree.add_leaf("ACGT".into());
/// let b = tree.add_leaf("ACCT".into());
/// let root = tree.add_internal((a, b))?;
/// tree.set_root(root)?;
///
/// assert_eq!(to_newick(&tree, NewickStyle::Leaves), "(ACGT,ACCT);");
/// # Ok::<(), ancestree::HistoryError>(())
/// ```
pub fn to_newick(tree: &HistoryTree, style: NewickStyle) -> String {
    // Recursive helper for building the Newick string
    fn build_newick(tree: &HistoryTree, newick: &mut String, index: VertexIndex, style: NewickStyle) {
        let vertex = &tree[index];

        match vertex.children() {
            None => {
                if let Some(label) = vertex.label() {
                    newick.push_str(&escape_label(&label.to_string()));
                }
            }
            Some((left, right)) => {
                newick.push('(');
                build_newick(tree, newick, left, style);
                newick.push(',');
                build_newick(tree, newick, right, style);
                newick.push(')');

                if style == NewickStyle::AllLabels {
                    if let Some(label) = vertex.label().filter(|l| !l.is_empty()) {
                        newick.push_str(&escape_label(&label.to_string()));
                    }
                }
            }
        }
    }

    if !tree.is_root_set() {
        return String::new();
    }

    let mut newick = String::with_capacity(estimate_newick_len(tree, style));
    build_newick(tree, &mut newick, tree.root_index(), style);
    newick.push(';');

    newick
}

/// Estimates the length of the Newick string of a history, to pre-allocate.
fn estimate_newick_len(tree: &HistoryTree, style: NewickStyle) -> usize {
    // Each internal vertex: "(,)"
    const INTERNAL_VERTEX_CHARS: usize = 3;

    let structure_capacity = tree.num_internal() * INTERNAL_VERTEX_CHARS;
    let label_capacity: usize = tree
        .in_order_iter()
        .filter(|v| v.is_leaf() || style == NewickStyle::AllLabels)
        .filter_map(|v| v.label())
        .map(|l| l.len())
        .sum();

    structure_capacity + label_capacity + BUFFER_CHARS
}

/// Escapes a label for Newick: labels that are empty or contain whitespace,
/// underscores or punctuation are wrapped in single quotes, with internal
/// single quotes doubled.
pub(crate) fn escape_label(label: &str) -> String {
    let needs_quotes = label.is_empty()
        || label.chars().any(|c| {
            c.is_whitespace()
                || matches!(c, '_' | ',' | ';' | '(' | ')' | ':' | '[' | ']' | '\'')
        });

    if needs_quotes {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

use ancestree::align::{AlignmentParams, align};
use ancestree::history::HistoryBuilder;
use ancestree::model::{HistoryTree, Sequence};
use ancestree::{HistoryError, build_history, build_history_with_params};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

const PRIMATES: &[&str] = &[
    "ACGTTGCAAT",
    "ACGTTGCATT",
    "ACGATGCAAT",
    "TCGTAGCAAT",
    "ACGTTGC",
    "GGGTTGCAATCC",
];

fn sorted_leaves(tree: &HistoryTree) -> Vec<Sequence> {
    let mut leaves: Vec<Sequence> = tree.leaves().into_iter().cloned().collect();
    leaves.sort();
    leaves
}

/// Random source returning the same word forever, so every consensus draw
/// picks the same row.
struct ConstantRng(u64);

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

fn ancestral_labels(tree: &HistoryTree) -> Vec<Option<Sequence>> {
    tree.in_order_iter()
        .filter(|v| v.is_internal())
        .map(|v| v.label().cloned())
        .collect()
}

// ============= Reconstruction Tests =============
#[test]
fn test_closest_pair_merges_first() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let tree = build_history(["ACGT", "ACCT", "AGGT"], &mut rng).unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 2);

    // ACCT/ACGT (distance 1) merge first, the later input on the left
    let (first_merge, last_leaf) = tree.root().children().unwrap();
    assert_eq!(tree[first_merge].children(), Some((1, 0)));
    assert_eq!(tree[last_leaf].label(), Some(&Sequence::from("AGGT")));
}

#[test]
fn test_leaves_are_the_inputs() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let tree = build_history(PRIMATES.iter().copied(), &mut rng).unwrap();

    let mut expected: Vec<Sequence> = PRIMATES.iter().map(|&s| Sequence::from(s)).collect();
    expected.sort();
    assert_eq!(sorted_leaves(&tree), expected);
    assert_eq!(tree.num_internal(), PRIMATES.len() - 1);
    assert!(tree.is_valid());
}

#[test]
fn test_duplicate_sequences_are_kept() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    let tree = build_history(["AC", "AC", "AC", "GT"], &mut rng).unwrap();
    assert_eq!(tree.num_leaves(), 4);
    assert_eq!(tree.num_internal(), 3);
    // Duplicates are at distance 0 and merge before anything involving GT
    assert_eq!(tree[4].children(), Some((1, 0)));
    // The merged vertex is the newest row, so it is the left child again
    assert_eq!(tree[5].children(), Some((4, 2)));
    assert_eq!(tree[6].children(), Some((5, 3)));
    assert_eq!(tree.root_index(), 6);
}

#[test]
fn test_later_merges_use_consensus_distances() {
    // 0 and 1 merge first. Their ancestor is a copy of one of them, and
    // that copy decides whether 2 or 3 joins next.
    let inputs = ["GGGGGGGG", "GGGGGGGT", "GGGGGTTT", "AAGGGGGG"];
    let mut merged_labels = Vec::new();

    for word in [0, u64::MAX] {
        let tree = build_history(inputs, &mut ConstantRng(word)).unwrap();
        assert_eq!(tree[4].children(), Some((1, 0)));

        let ancestor = tree[4].label().unwrap().clone();
        if ancestor == Sequence::from(inputs[1]) {
            // Distance 2 to GGGGGTTT, 3 to AAGGGGGG
            assert_eq!(tree[5].children(), Some((4, 2)));
            assert_eq!(tree[6].children(), Some((5, 3)));
        } else {
            assert_eq!(ancestor, Sequence::from(inputs[0]));
            // Distance 3 to GGGGGTTT, 2 to AAGGGGGG
            assert_eq!(tree[5].children(), Some((4, 3)));
            assert_eq!(tree[6].children(), Some((5, 2)));
        }
        assert!(tree.is_valid());
        merged_labels.push(ancestor);
    }

    // Both ancestors occur, so both branches above were taken
    assert_ne!(merged_labels[0], merged_labels[1]);
}

#[test]
fn test_single_sequence() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let mut tree = build_history(["GATTACA"], &mut rng).unwrap();

    assert!(tree.root().is_leaf());
    assert_eq!(tree.num_internal(), 0);
    tree.reconstruct_ancestors(&mut rng);
    assert_eq!(tree.history_cost(), Ok(0));
}

#[test]
fn test_empty_input_is_rejected() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let result = build_history(Vec::<Sequence>::new(), &mut rng);
    assert_eq!(result.unwrap_err(), HistoryError::EmptyInput);
}

#[test]
fn test_bounds_are_enforced() {
    let result = HistoryBuilder::new()
        .with_max_sequences(2)
        .build(["A", "C", "G"]);
    assert_eq!(
        result.unwrap_err(),
        HistoryError::TooManySequences { count: 3, max: 2 }
    );

    let result = HistoryBuilder::new()
        .with_max_sequence_length(4)
        .build(["ACGT", "ACGTA"]);
    assert_eq!(
        result.unwrap_err(),
        HistoryError::SequenceTooLong {
            index: 1,
            len: 5,
            max: 4
        }
    );
}

#[test]
fn test_empty_sequences_are_accepted() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
    let mut tree = build_history(["", "", "AC"], &mut rng).unwrap();
    tree.reconstruct_ancestors(&mut rng);

    // The two empty sequences merge first and their ancestor is empty
    assert_eq!(tree[3].children(), Some((1, 0)));
    assert_eq!(tree[3].label(), Some(&Sequence::default()));
    assert_eq!(tree.history_cost(), Ok(2));
}

#[test]
fn test_penalties_are_kept_on_tree() {
    let params = AlignmentParams::new(3, 2);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let tree = build_history_with_params(["AAA", "AAT"], params, &mut rng).unwrap();
    assert_eq!(tree.params(), &params);

    let tree = HistoryBuilder::new()
        .with_gap_penalty(4)
        .with_substitution_penalty(7)
        .with_seed(11)
        .build(["AAA", "AAT"])
        .unwrap();
    assert_eq!(tree.params(), &AlignmentParams::new(4, 7));
}

// ============= Ancestor Inference Tests =============
#[test]
fn test_ancestors_are_non_empty() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
    let mut tree = build_history(PRIMATES.iter().copied(), &mut rng).unwrap();
    tree.reconstruct_ancestors(&mut rng);

    for vertex in tree.in_order_iter() {
        let label = vertex.label().unwrap();
        assert!(!label.is_empty());
        assert!(label.as_bytes().iter().all(|s| b"ACGT".contains(s)));
    }
}

#[test]
fn test_ancestors_reproducible_with_seed() {
    let builder = HistoryBuilder::new().with_seed(7);
    let mut tree_a = builder.build(PRIMATES.iter().copied()).unwrap();
    let mut tree_b = tree_a.clone();

    tree_a.reconstruct_ancestors(&mut Xoshiro256PlusPlus::seed_from_u64(99));
    tree_b.reconstruct_ancestors(&mut Xoshiro256PlusPlus::seed_from_u64(99));
    assert_eq!(ancestral_labels(&tree_a), ancestral_labels(&tree_b));

    let tree_c = builder.build(PRIMATES.iter().copied()).unwrap();
    let tree_d = builder.build(PRIMATES.iter().copied()).unwrap();
    assert_eq!(ancestral_labels(&tree_c), ancestral_labels(&tree_d));
}

#[test]
fn test_reconstruction_keeps_topology() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(13);
    let mut tree = build_history(PRIMATES.iter().copied(), &mut rng).unwrap();
    let before: Vec<_> = tree.in_order_iter().map(|v| v.children()).collect();
    let leaves_before = sorted_leaves(&tree);

    tree.reconstruct_ancestors(&mut rng);
    tree.reconstruct_ancestors(&mut rng);

    let after: Vec<_> = tree.in_order_iter().map(|v| v.children()).collect();
    assert_eq!(before, after);
    assert_eq!(sorted_leaves(&tree), leaves_before);
}

// ============= History Cost Tests =============
#[test]
fn test_history_cost_sums_sibling_scores() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);
    let mut tree = build_history(PRIMATES.iter().copied(), &mut rng).unwrap();
    tree.reconstruct_ancestors(&mut rng);

    let expected: usize = tree
        .post_order_iter()
        .filter_map(|v| v.children())
        .map(|(l, r)| {
            align(tree[l].label().unwrap(), tree[r].label().unwrap(), tree.params()).score()
        })
        .sum();
    assert_eq!(tree.history_cost(), Ok(expected));
}

#[test]
fn test_history_cost_of_example() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut tree = build_history(["ACGT", "ACCT", "AGGT"], &mut rng).unwrap();
    tree.reconstruct_ancestors(&mut rng);

    // 1 between ACCT and ACGT, plus 1 or 2 from their ancestor to AGGT
    let cost = tree.history_cost().unwrap();
    assert!(cost == 2 || cost == 3);
}

#[test]
fn test_history_cost_unavailable_after_clearing() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
    let mut tree = build_history(["AC", "AG", "TT"], &mut rng).unwrap();
    assert!(tree.history_cost().is_ok());

    tree.clear_ancestral_labels();
    assert!(matches!(
        tree.history_cost(),
        Err(HistoryError::MissingLabel { .. })
    ));
}

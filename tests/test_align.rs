use ancestree::align::{AlignmentParams, align, align_score};
use ancestree::model::Sequence;

const PAIRS: &[(&str, &str)] = &[
    ("ACGT", "ACCT"),
    ("ACGT", "AGGT"),
    ("GATTACA", "GCATGCU"),
    ("kitten", "sitting"),
    ("AAAAAA", "A"),
    ("", "TTG"),
    ("CAT", "TAC"),
];

#[test]
fn test_score_is_symmetric() {
    let params = AlignmentParams::default();
    for (a, b) in PAIRS {
        assert_eq!(align(a, b, &params).score(), align(b, a, &params).score());
    }
}

#[test]
fn test_self_alignment_scores_zero() {
    let params = AlignmentParams::new(2, 3);
    for (a, b) in PAIRS {
        assert_eq!(align(a, a, &params).score(), 0);
        assert_eq!(align(b, b, &params).score(), 0);
    }
}

#[test]
fn test_removing_gaps_recovers_inputs() {
    let params = AlignmentParams::default();
    for (a, b) in PAIRS {
        let alignment = align(a, b, &params);
        let (first, second) = alignment.aligned();
        assert_eq!(first.len(), second.len());
        assert_eq!(first.ungapped(), Sequence::from(*a));
        assert_eq!(second.ungapped(), Sequence::from(*b));
    }
}

#[test]
fn test_no_column_is_gap_in_both_rows() {
    let params = AlignmentParams::default();
    for (a, b) in PAIRS {
        let alignment = align(a, b, &params);
        assert!(alignment.columns().all(|(x, y)| x.is_some() || y.is_some()));
    }
}

#[test]
fn test_empty_sequences() {
    let params = AlignmentParams::default();
    let alignment = align("", "", &params);
    assert_eq!(alignment.score(), 0);
    assert!(alignment.is_empty());

    let alignment = align("AC", "", &params);
    assert_eq!(alignment.score(), 2);
    assert_eq!(alignment.first().to_string(), "AC");
    assert_eq!(alignment.second().to_string(), "--");

    let alignment = align("", "AC", &AlignmentParams::new(3, 1));
    assert_eq!(alignment.score(), 6);
    assert_eq!(alignment.first().num_gaps(), 2);
}

#[test]
fn test_known_edit_distances() {
    let params = AlignmentParams::default();
    assert_eq!(align("kitten", "sitting", &params).score(), 3);
    assert_eq!(align("ACGT", "ACCT", &params).score(), 1);
    assert_eq!(align("ACCT", "AGGT", &params).score(), 2);
    assert_eq!(align("CAT", "TAC", &params).score(), 2);
}

#[test]
fn test_expensive_substitution_prefers_gaps() {
    let alignment = align("A", "B", &AlignmentParams::new(1, 5));
    assert_eq!(alignment.score(), 2);
    assert_eq!(alignment.len(), 2);

    let alignment = align("A", "B", &AlignmentParams::new(1, 2));
    assert_eq!(alignment.score(), 2);
    assert_eq!(alignment.len(), 1);
}

#[test]
fn test_traceback_prefers_substitution_on_ties() {
    // Substitution and gap pair both cost 2; the diagonal is taken
    let alignment = align("AC", "AG", &AlignmentParams::new(1, 2));
    assert_eq!(alignment.score(), 2);
    assert_eq!(alignment.first().to_string(), "AC");
    assert_eq!(alignment.second().to_string(), "AG");
}

#[test]
fn test_score_only_agrees_with_alignment() {
    let params = AlignmentParams::new(2, 1);
    for (a, b) in PAIRS {
        assert_eq!(align_score(a, b, &params), align(a, b, &params).score());
    }
}

#[test]
fn test_arbitrary_symbols() {
    let a = Sequence::new(vec![0u8, 255, b'-', 7]);
    let b = Sequence::new(vec![0u8, b'-', 7]);
    let alignment = align(&a, &b, &AlignmentParams::default());
    assert_eq!(alignment.score(), 1);
    assert_eq!(alignment.first().ungapped(), a);
    assert_eq!(alignment.second().ungapped(), b);
}

use ancestree::align::{AlignmentParams, align, align_score};
use ancestree::history::HistoryBuilder;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

/// (name, number of sequences, sequence length)
const HISTORY_SIZES: &[(&str, usize, usize)] = &[
    ("n10-l100", 10, 100),
    ("n30-l100", 30, 100),
    ("n20-l300", 20, 300),
];

fn random_sequences(count: usize, length: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<Vec<u8>> {
    const NUCLEOTIDES: &[u8] = b"ACGT";
    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
                .collect()
        })
        .collect()
}

fn alignment(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let pair = random_sequences(2, 1000, &mut rng);
    let params = AlignmentParams::default();

    c.bench_function("align-l1000", |b| {
        b.iter(|| align(black_box(&pair[0]), black_box(&pair[1]), &params));
    });
    c.bench_function("align-score-l1000", |b| {
        b.iter(|| align_score(black_box(&pair[0]), black_box(&pair[1]), &params));
    });
}

fn reconstruction(c: &mut Criterion) {
    for (name, count, length) in HISTORY_SIZES {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let sequences = random_sequences(*count, *length, &mut rng);
        let builder = HistoryBuilder::new().with_seed(7);

        c.bench_function(name, |b| {
            b.iter(|| {
                let mut tree = builder.build(sequences.iter().cloned()).unwrap();
                tree.reconstruct_ancestors(&mut rng);
                tree.history_cost().unwrap()
            });
        });
    }
}

criterion_group!(regression, alignment);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = reconstruction
}
criterion_main!(regression, reporting);

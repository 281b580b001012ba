use ancestree::HistoryBuilder;
use ancestree::align::{DEFAULT_GAP_PENALTY, DEFAULT_SUBSTITUTION_PENALTY};
use ancestree::newick::{NewickStyle, to_newick};
use clap::Parser;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "ancestree")]
#[command(author, version, about = "Reconstructs a history of sequences with ancestral sequences", long_about = None)]
struct Cli {
    /// Seed for ancestor sampling; drawn from entropy if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cost of aligning a symbol against a gap
    #[arg(short, long, default_value_t = DEFAULT_GAP_PENALTY)]
    gap_penalty: usize,

    /// Cost of aligning two different symbols
    #[arg(short = 'u', long, default_value_t = DEFAULT_SUBSTITUTION_PENALTY)]
    substitution_penalty: usize,

    /// Sequences at the leaves of the history
    #[arg(required = true)]
    sequences: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut builder = HistoryBuilder::new()
        .with_gap_penalty(cli.gap_penalty)
        .with_substitution_penalty(cli.substitution_penalty);
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }

    let mut rng = builder.rng();
    let mut tree = match builder.build_with_rng(cli.sequences, &mut rng) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    tree.reconstruct_ancestors(&mut rng);

    print!("{tree}");
    println!("{}", to_newick(&tree, NewickStyle::AllLabels));
    match tree.history_cost() {
        Ok(cost) => println!("History cost: {cost}"),
        Err(e) => println!("History cost unavailable: {e}"),
    }
}

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

mod dict;
mod expand;
mod index;
mod letters;
mod solver;

use dict::Dictionary;
use expand::Expander;
use index::WordIndex;
use letters::{BucketTable, Ranking};
use solver::Solver;

/// Find every set of five five-letter words covering 25 distinct letters.
#[derive(Parser)]
struct Args {
    /// Dictionary file, one word per line.
    #[clap(default_value = "words_alpha.txt")]
    dictionary: PathBuf,

    /// Benchmark iterations; the dictionary is re-read and re-indexed every
    /// time, only the fixed tables are reused.
    #[clap(short, long, default_value_t = 1)]
    iterations: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let iterations = args.iterations.max(1);

    // Both depend only on the letter ranking, not on the dictionary.
    let ranking = Ranking::new();
    let buckets = BucketTable::new();

    let total = Instant::now();
    for _ in 0..iterations {
        run(&args.dictionary, &ranking, &buckets)?;
    }
    eprintln!("avg time: {:.1?}", total.elapsed() / iterations);
    Ok(())
}

fn run(dictionary: &Path, ranking: &Ranking, buckets: &BucketTable) -> Result<()> {
    let start = Instant::now();
    let dict = Dictionary::load(dictionary)?;
    let index = WordIndex::build(&dict, ranking);
    let prepared = start.elapsed();

    let mut out = Expander::new(&dict, &index);
    let found = Solver::new(&index, ranking, buckets).run(&mut out);
    let searched = start.elapsed() - prepared;

    io::stdout().write_all(&out.into_output())?;
    eprintln!(
        "{found} solutions from {} candidate words ({} distinct letter sets); prep {prepared:.1?}, search {searched:.1?}",
        dict.word_offsets().len(),
        index.distinct_masks(),
    );
    Ok(())
}

use pagerank_estimator::*;

use log::debug;
use serde::Serialize;
use structopt::StructOpt;

use std::path::{Path, PathBuf};
use std::process;

/// Estimate PageRank for a corpus of linked pages, both by random-walk
/// sampling and by fixed-point iteration
#[derive(Debug, StructOpt)]
#[structopt(
    name = "pagerank",
    about = "Estimate PageRank for a corpus of linked pages"
)]
struct Cli {
    /// Path to the corpus: a directory of HTML pages, or a JSON file mapping
    /// each page to the list of pages it links to.
    corpus_path: PathBuf,

    /// Damping factor of the random-surfer model, strictly between 0 and 1.
    #[structopt(short = "d", long = "damping", default_value = "0.85")]
    damping: DampingFactor,

    /// Number of samples for the sampling estimator.
    #[structopt(short = "s", long = "samples", default_value = "10000")]
    samples: usize,

    /// Emit the results as JSON instead of plain text.
    #[structopt(long = "json")]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Results {
    damping: DampingFactor,
    samples: usize,
    sampling: Vec<RankedPage>,
    iteration: Vec<RankedPage>,
}

fn main() {
    env_logger::init();
    let cli = Cli::from_args();
    if cli.damping <= 0.0 || cli.damping >= 1.0 {
        eprintln!(
            "damping factor must be strictly between 0 and 1, got {}",
            cli.damping
        );
        process::exit(2);
    }
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RankError> {
    let corpus = load_corpus(&cli.corpus_path)?;
    eprintln!("Loaded corpus with {} pages.", corpus.len());

    let sampled = sample_pagerank(&corpus, cli.damping, cli.samples)?;
    let iterated = iterate_pagerank(&corpus, cli.damping)?;
    debug!("highest ranked page: {:?}", rank_order(&iterated).first());

    if cli.json {
        let results = Results {
            damping: cli.damping,
            samples: cli.samples,
            sampling: create_rank_report(&sampled),
            iteration: create_rank_report(&iterated),
        };
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("PageRank Results from Sampling (n = {})", cli.samples);
        print_report(&sampled);
        println!("PageRank Results from Iteration");
        print_report(&iterated);
    }
    Ok(())
}

fn load_corpus(path: &Path) -> Result<Corpus, RankError> {
    if path.extension().map_or(false, |ext| ext == "json") {
        eprintln!("Reading corpus JSON from file...");
        Corpus::from_json_file(path)
    } else {
        eprintln!("Crawling corpus directory...");
        crawl(path)
    }
}

fn print_report(ranks: &RankTable) {
    for row in create_rank_report(ranks) {
        println!("  {}: {:.4}", row.page, row.rank);
    }
}

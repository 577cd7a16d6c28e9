use crate::{transition_model, weighted_choice, Corpus, DampingFactor, Page, RankError, RankTable};

use log::debug;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;

/// Estimates PageRank by simulating a random surfer for `n` steps and
/// counting visits. The first visit lands on a uniformly random page; every
/// further step follows the transition model for the current page. The
/// corpus is never modified.
pub fn sample_pagerank(
    corpus: &Corpus,
    damping_factor: DampingFactor,
    n: usize,
) -> Result<RankTable, RankError> {
    if n == 0 {
        return Err(RankError::InvalidSampleCount(n));
    }

    let mut rng = rand::thread_rng();
    let mut visits: BTreeMap<Page, usize> = corpus.pages().map(|p| (p.clone(), 0)).collect();

    let mut current: Page = corpus
        .pages()
        .choose(&mut rng)
        .ok_or_else(|| RankError::InvalidCorpus("no pages to rank".to_string()))?
        .clone();
    *visits.entry(current.clone()).or_default() += 1;

    for _ in 1..n {
        let distribution = transition_model(corpus, &current, damping_factor)?;
        current = weighted_choice(&distribution, &mut rng)
            .ok_or_else(|| RankError::InvalidCorpus("empty transition distribution".to_string()))?
            .clone();
        *visits.entry(current.clone()).or_default() += 1;
    }
    debug!("visit counts after {} samples: {:?}", n, visits);

    Ok(visits
        .into_iter()
        .map(|(page, count)| (page, count as f64 / n as f64))
        .collect())
}

use crate::graph::LinkMap;
use crate::{Corpus, DampingFactor, Page, RankError, RankTable};

use log::debug;
use std::collections::BTreeSet;

/// Per-page absolute change below which the ranks count as converged
const CONVERGENCE_THRESHOLD: f64 = 0.001;
/// Safety bound; the damped recurrence converges geometrically long before this
const MAX_ITERATIONS: usize = 10_000;

/// Derives the effective out-links for the recurrence: a dead end is treated
/// as linking to every corpus page (itself included) so its rank mass is
/// redistributed instead of lost. The corpus is left untouched, which makes
/// re-deriving a no-op.
pub(crate) fn normalize_dead_ends(links: &LinkMap) -> LinkMap {
    let all_pages: BTreeSet<Page> = links.keys().cloned().collect();
    links
        .iter()
        .map(|(page, targets)| {
            let effective = if targets.is_empty() {
                all_pages.clone()
            } else {
                targets.clone()
            };
            (page.clone(), effective)
        })
        .collect()
}

/// Computes PageRank by fixed-point iteration on
/// `PR(p) = (1 - d) / N + d * sum over q -> p of PR(q) / L(q)`.
///
/// Every rank starts at `1/N`; each pass distributes `d * PR(q) / L(q)` from
/// every page to its effective out-link targets on top of the base term.
/// Iteration stops once no page moved by `CONVERGENCE_THRESHOLD` or more.
/// Deterministic: identical inputs produce bitwise identical tables.
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: DampingFactor) -> Result<RankTable, RankError> {
    if corpus.is_empty() {
        return Err(RankError::InvalidCorpus("no pages to rank".to_string()));
    }
    let total_pages = corpus.len() as f64;
    let base = (1.0 - damping_factor) / total_pages;
    let effective_links = normalize_dead_ends(corpus.link_map());

    let mut ranks: RankTable = corpus
        .pages()
        .map(|p| (p.clone(), 1.0 / total_pages))
        .collect();

    for iteration in 0..MAX_ITERATIONS {
        let mut next: RankTable = corpus.pages().map(|p| (p.clone(), base)).collect();
        for (page, targets) in &effective_links {
            let share = damping_factor * ranks[page] / targets.len() as f64;
            for target in targets {
                if let Some(rank) = next.get_mut(target) {
                    *rank += share;
                }
            }
        }

        let converged = ranks
            .iter()
            .all(|(page, old)| (next[page] - old).abs() < CONVERGENCE_THRESHOLD);
        ranks = next;
        if converged {
            debug!("ranks converged after {} iterations", iteration + 1);
            return Ok(ranks);
        }
    }
    Err(RankError::Convergence(MAX_ITERATIONS))
}

use crate::{Corpus, DampingFactor, Distribution, RankError};

/// Returns the probability distribution over which page a random surfer on
/// `page` visits next.
///
/// With probability `damping_factor` the surfer follows one of the page's
/// out-links; with probability `1 - damping_factor` it jumps to any corpus
/// page. A dead end gets the uniform distribution `1/N` over all pages. The
/// result sums to 1.0 by construction, without a renormalization step.
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping_factor: DampingFactor,
) -> Result<Distribution, RankError> {
    let links = corpus.out_links(page)?;
    let total_pages = corpus.len() as f64;

    if links.is_empty() {
        // Pure random jump; damping plays no part at a dead end
        return Ok(corpus
            .pages()
            .map(|p| (p.clone(), 1.0 / total_pages))
            .collect());
    }

    let base = (1.0 - damping_factor) / total_pages;
    let follow = damping_factor / links.len() as f64;
    Ok(corpus
        .pages()
        .map(|p| {
            let probability = if links.contains(p) { base + follow } else { base };
            (p.clone(), probability)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::corpus_from;
    use approx::assert_abs_diff_eq;

    fn three_page_corpus() -> Corpus {
        corpus_from(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[])])
    }

    #[test]
    fn distribution_sums_to_one_with_one_entry_per_page() {
        let corpus = three_page_corpus();
        for damping in [0.05, 0.5, 0.85, 0.95] {
            for page in ["a", "b", "c"] {
                let distribution = transition_model(&corpus, page, damping).unwrap();
                assert_eq!(distribution.len(), corpus.len());
                let total: f64 = distribution.values().sum();
                assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn linked_pages_split_the_damped_share() {
        let corpus = three_page_corpus();
        let distribution = transition_model(&corpus, "a", 0.85).unwrap();
        // (1 - 0.85) / 3 for everyone, plus 0.85 / 2 for each of a's two links
        assert_abs_diff_eq!(distribution["a"], 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(distribution["b"], 0.05 + 0.425, epsilon = 1e-12);
        assert_abs_diff_eq!(distribution["c"], 0.05 + 0.425, epsilon = 1e-12);
    }

    #[test]
    fn linked_pages_beat_unlinked_pages_for_positive_damping() {
        let corpus = three_page_corpus();
        for damping in [0.1, 0.85, 0.99] {
            let distribution = transition_model(&corpus, "b", damping).unwrap();
            assert!(distribution["c"] > distribution["a"]);
        }
    }

    #[test]
    fn dead_end_is_uniform_regardless_of_damping() {
        let corpus = three_page_corpus();
        for damping in [0.05, 0.85, 0.95] {
            let distribution = transition_model(&corpus, "c", damping).unwrap();
            for page in ["a", "b", "c"] {
                assert_eq!(distribution[page], 1.0 / 3.0);
            }
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        let corpus = three_page_corpus();
        let err = transition_model(&corpus, "nope", 0.85).unwrap_err();
        assert!(matches!(err, RankError::UnknownPage(p) if p == "nope"));
    }
}

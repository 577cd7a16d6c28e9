mod corpus;

pub use corpus::*;

/// Test helper: build a corpus from string-literal page/out-link pairs
#[cfg(test)]
pub(crate) fn corpus_from(pairs: &[(&str, &[&str])]) -> Corpus {
    Corpus::from_links(pairs.iter().map(|(page, links)| {
        (
            page.to_string(),
            links.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
        )
    }))
}

use crate::{Page, RankError};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub(crate) type LinkMap = BTreeMap<Page, BTreeSet<Page>>;

/// The link graph: every page mapped to the set of pages it links to.
///
/// Out-links only ever point at other corpus members; self-links and links
/// to pages outside the corpus are dropped at construction. A page may keep
/// an empty out-link set (a dead end). Ordered maps keep iteration, and with
/// it every floating-point accumulation downstream, deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    links: LinkMap,
}

impl Corpus {
    /// Builds a corpus from raw page/out-link pairs, enforcing the
    /// membership invariant.
    pub fn from_links<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = (Page, S)>,
        S: IntoIterator<Item = Page>,
    {
        let raw: LinkMap = raw
            .into_iter()
            .map(|(page, links)| (page, links.into_iter().collect()))
            .collect();
        let members: BTreeSet<Page> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let targets = targets
                    .into_iter()
                    .filter(|t| *t != page && members.contains(t))
                    .collect();
                (page, targets)
            })
            .collect();
        Self { links }
    }

    /// Reads a corpus from a JSON object of the form
    /// `{ "page": ["link", ...], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let raw: BTreeMap<Page, Vec<Page>> = serde_json::from_str(json)?;
        Ok(Self::from_links(raw))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The set of pages `page` links to
    pub fn out_links(&self, page: &str) -> Result<&BTreeSet<Page>, RankError> {
        self.links
            .get(page)
            .ok_or_else(|| RankError::UnknownPage(page.to_owned()))
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub(crate) fn link_map(&self) -> &LinkMap {
        &self.links
    }
}

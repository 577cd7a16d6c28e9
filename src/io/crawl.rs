use crate::{Corpus, Page, RankError};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

lazy_static! {
    static ref HREF: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Scans a directory of HTML pages and builds the link graph. Pages are
/// keyed by file name; only `href` targets that are themselves pages of the
/// directory survive corpus construction.
pub fn crawl(directory: &Path) -> Result<Corpus, RankError> {
    let mut pages: BTreeMap<Page, Vec<Page>> = BTreeMap::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path())?;
        let links = HREF
            .captures_iter(&contents)
            .map(|capture| capture[1].to_string())
            .collect();
        debug!("extracted links of {}: {:?}", name, links);
        pages.insert(name, links);
    }
    Ok(Corpus::from_links(pages))
}

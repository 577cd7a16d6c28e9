use crate::{round_to_four_places, Page, Rank, RankTable};

use itertools::Itertools;
use serde::Serialize;

/// One display row of a rank table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    pub page: Page,
    pub rank: Rank,
}

/// Returns display rows sorted by page identifier, with ranks rounded to
/// four decimal places
pub fn create_rank_report(ranks: &RankTable) -> Vec<RankedPage> {
    ranks
        .iter()
        .map(|(page, rank)| RankedPage {
            page: page.clone(),
            rank: round_to_four_places(*rank),
        })
        .collect()
}

/// Pages sorted by "highest rank first"
pub fn rank_order(ranks: &RankTable) -> Vec<Page> {
    ranks
        .iter()
        .sorted_by(|x, y| y.1.partial_cmp(x.1).unwrap())
        .map(|(page, _)| page.clone())
        .collect()
}

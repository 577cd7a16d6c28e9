use crate::{Distribution, Page};

use rand::Rng;

/// Weighted random choice via cumulative-distribution lookup: draw a uniform
/// value in `[0, 1)` and select the first page whose cumulative probability
/// reaches it. If accumulated rounding leaves the total just under the draw,
/// the last page wins. Returns `None` only for an empty distribution.
pub(crate) fn weighted_choice<'a, R: Rng>(
    distribution: &'a Distribution,
    rng: &mut R,
) -> Option<&'a Page> {
    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (page, probability) in distribution {
        cumulative += probability;
        if cumulative >= draw {
            return Some(page);
        }
    }
    distribution.keys().next_back()
}

pub(crate) fn round_to_four_places(n: f64) -> f64 {
    (n * 10_000.0).round() / 10_000.0
}

use crate::Rank;

use std::collections::BTreeMap;
use thiserror::Error;

pub type Page = String;

/// One-step transition probabilities, one entry per corpus page
pub type Distribution = BTreeMap<Page, Rank>;
/// Final output of an estimator, same shape as a Distribution
pub type RankTable = BTreeMap<Page, Rank>;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("corpus is invalid: {0}")]
    InvalidCorpus(String),
    #[error("page '{0}' not found in corpus")]
    UnknownPage(Page),
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
    #[error("ranks did not converge within {0} iterations")]
    Convergence(usize),
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}
